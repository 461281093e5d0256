use koto_types::FuriganaToken;

use crate::kana::is_kana_only;

/// Clear the reading of every pure-kana token.
///
/// Readings on tokens that contain anything else pass through untouched,
/// including a missing one. Same length and order as the input.
pub fn normalize_tokens(tokens: Vec<FuriganaToken>) -> Vec<FuriganaToken> {
    tokens
        .into_iter()
        .map(|mut token| {
            if is_kana_only(&token.text) {
                token.furigana = None;
            }
            token
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> Vec<FuriganaToken> {
        vec![
            FuriganaToken::new("後", Some("あと")),
            FuriganaToken::new("の", Some("の")),
            FuriganaToken::new("祭", Some("まつ")),
            FuriganaToken::new("り", Some("")),
            FuriganaToken::new("メダル", Some("めだる")),
            FuriganaToken::new("級", None),
            FuriganaToken::new("ABC", Some("えーびーしー")),
        ]
    }

    #[test]
    fn kana_tokens_lose_their_reading() {
        let tokens = normalize_tokens(raw());

        let readings: Vec<Option<&str>> = tokens.iter().map(|t| t.furigana.as_deref()).collect();
        assert_eq!(
            readings,
            vec![
                Some("あと"),
                None,
                Some("まつ"),
                None,
                None,
                None,
                Some("えーびーしー"),
            ]
        );
    }

    #[test]
    fn keeps_length_and_order() {
        let before: Vec<String> = raw().into_iter().map(|t| t.text).collect();
        let after: Vec<String> = normalize_tokens(raw()).into_iter().map(|t| t.text).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn idempotent() {
        let once = normalize_tokens(raw());
        let twice = normalize_tokens(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input() {
        assert!(normalize_tokens(Vec::new()).is_empty());
    }
}
