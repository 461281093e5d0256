use koto_core::Reading;
use koto_core::render::{render_html, render_text};
use koto_core::token::validate;
use koto_types::VocabularyEntry;

fn short_id(entry: &VocabularyEntry) -> String {
    entry.id.to_string().chars().take(8).collect()
}

/// One-entry summary: id, annotated text, meaning
pub fn format_entry(entry: &VocabularyEntry, html: bool) -> String {
    let focus = entry.focused_term.as_deref();

    if let Reading::Tokens(tokens) = Reading::parse(&entry.reading) {
        for violation in validate(&tokens, entry.target()) {
            tracing::warn!("Entry {}: {}", entry.id, violation);
        }
    }

    let rendered = if html {
        render_html(&entry.content, focus, &entry.reading)
    } else {
        render_text(&entry.content, focus, &entry.reading)
    };

    format!("{}  {}\n          {}", short_id(entry), rendered, entry.meaning)
}

/// Summary plus the token table, numbered for `set-reading`
pub fn format_entry_detail(entry: &VocabularyEntry) -> String {
    let mut out = format_entry(entry, false);
    out.push('\n');
    out.push_str(&format!("  id:      {}\n", entry.id));
    if let Some(term) = &entry.focused_term {
        out.push_str(&format!("  focus:   {term}\n"));
    }

    match Reading::parse(&entry.reading) {
        Reading::Tokens(tokens) => {
            for (i, token) in tokens.iter().enumerate() {
                let reading = token.furigana.as_deref().unwrap_or("-");
                out.push_str(&format!("  [{i}] {}  {reading}\n", token.text));
            }
        }
        Reading::Flat(flat) => out.push_str(&format!("  reading: {flat} (legacy)\n")),
    }

    out.push_str(&format!(
        "  created: {}  updated: {}",
        entry.created_at.format("%Y-%m-%d %H:%M"),
        entry.updated_at.format("%Y-%m-%d %H:%M")
    ));
    out
}
