use koto_generator::GenerationRequest;

/// Instruction text sent with every request
pub fn build_prompt(request: &GenerationRequest) -> String {
    let context_line = match request.context() {
        Some(content) => format!("Full Context: \"{content}\""),
        None => "Full Context: None (target is the complete input)".to_string(),
    };

    format!(
        r#"You are a Japanese dictionary assistant for "KOTO", a vocabulary notebook.

Target: "{target}"
{context_line}

Instructions:
1. Split the target into units from left to right. Concatenating every unit's text must give back the target exactly.
2. Keep kanji compounds, single kanji, particles and whole katakana words as one unit each.
3. Give each unit containing kanji its hiragana reading in "furigana". Use the reading that fits the context (handle homographs).
4. Units written only in hiragana or katakana get "furigana": null.
5. Give a concise Japanese definition (国語辞典 style, 1-2 sentences) suitable for a native high school student.
6. Output ONLY Japanese. Do NOT output Chinese or English."#,
        target = request.target(),
    )
}
