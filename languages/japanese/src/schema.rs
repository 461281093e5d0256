use serde_json::{Value, json};

/// Structured-output schema: a token array and a meaning, nothing else
pub fn entry_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "reading": {
                "type": "ARRAY",
                "description": "The target split into units, in order, covering every character.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "text": { "type": "STRING" },
                        "furigana": {
                            "type": "STRING",
                            "nullable": true,
                            "description": "Hiragana reading, null for kana-only units."
                        }
                    },
                    "required": ["text", "furigana"]
                }
            },
            "meaning": {
                "type": "STRING",
                "description": "A concise Japanese definition (J-J)."
            }
        },
        "required": ["reading", "meaning"]
    })
}
