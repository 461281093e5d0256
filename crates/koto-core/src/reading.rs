use koto_types::FuriganaToken;

/// The two encodings a stored reading field can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reading {
    /// One phonetic string for the whole target
    Flat(String),
    /// Non-empty token sequence, one reading per unit
    Tokens(Vec<FuriganaToken>),
}

impl Reading {
    /// Interpret a stored reading field.
    ///
    /// Anything that is not a non-empty JSON array of tokens is a flat
    /// reading, so this never fails.
    pub fn parse(raw: &str) -> Self {
        match Self::parse_tokens(raw) {
            Some(tokens) => Reading::Tokens(tokens),
            None => Reading::Flat(raw.to_string()),
        }
    }

    /// Try-parse the tokenized encoding
    pub fn parse_tokens(raw: &str) -> Option<Vec<FuriganaToken>> {
        serde_json::from_str::<Vec<FuriganaToken>>(raw)
            .ok()
            .filter(|tokens| !tokens.is_empty())
    }

    /// String form written back to storage
    pub fn to_stored(&self) -> String {
        match self {
            Reading::Flat(reading) => reading.clone(),
            // a Vec of plain structs always serializes
            Reading::Tokens(tokens) => serde_json::to_string(tokens).unwrap_or_default(),
        }
    }

    /// Tokens for editing; flat readings start over from an empty list
    pub fn tokens_or_empty(&self) -> Vec<FuriganaToken> {
        match self {
            Reading::Tokens(tokens) => tokens.clone(),
            Reading::Flat(_) => Vec::new(),
        }
    }

    /// Every reading joined into one phonetic string, kana units spelled as-is
    pub fn phonetic(&self) -> String {
        match self {
            Reading::Flat(reading) => reading.clone(),
            Reading::Tokens(tokens) => tokens
                .iter()
                .map(|t| t.furigana.as_deref().unwrap_or(&t.text))
                .collect(),
        }
    }
}

impl From<Vec<FuriganaToken>> for Reading {
    fn from(tokens: Vec<FuriganaToken>) -> Self {
        Reading::Tokens(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEDAL: &str = r#"[{"text":"金","furigana":"きん"},{"text":"メダル","furigana":null},{"text":"級","furigana":"きゅう"}]"#;

    #[test]
    fn parses_token_array() {
        let Reading::Tokens(tokens) = Reading::parse(MEDAL) else {
            panic!("expected tokens");
        };
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], FuriganaToken::kana("メダル"));
    }

    #[test]
    fn stored_form_round_trips() {
        assert_eq!(Reading::parse(MEDAL).to_stored(), MEDAL);
        assert_eq!(Reading::parse("あと").to_stored(), "あと");
    }

    #[test]
    fn legacy_and_malformed_are_flat() {
        for raw in [
            "あと",
            "",
            "[]",
            "[{\"text\":\"金\"}]",
            "{\"text\":\"金\",\"furigana\":\"きん\"}",
            "[{\"text\":\"金\",\"furigana\":",
            "null",
        ] {
            assert_eq!(Reading::parse(raw), Reading::Flat(raw.to_string()), "{raw}");
        }
    }

    #[test]
    fn editing_view() {
        assert!(Reading::parse("あと").tokens_or_empty().is_empty());
        assert_eq!(Reading::parse(MEDAL).tokens_or_empty().len(), 3);
    }

    #[test]
    fn phonetic_spelling() {
        assert_eq!(Reading::parse(MEDAL).phonetic(), "きんメダルきゅう");
        assert_eq!(Reading::parse("あと").phonetic(), "あと");
    }
}
