use koto_types::FuriganaToken;

use crate::kana::is_kana_only;

/// A way a token sequence breaks the annotation invariants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenViolation {
    #[error("Token {index} has empty text")]
    EmptyText { index: usize },

    #[error("Token {index} ({text}) is kana but carries a reading")]
    KanaWithReading { index: usize, text: String },

    #[error("Tokens spell {actual:?}, expected {expected:?}")]
    Coverage { expected: String, actual: String },
}

/// Check `tokens` against the source text they claim to annotate.
///
/// Returns every violation found, an empty list means the sequence is sound.
pub fn validate(tokens: &[FuriganaToken], source: &str) -> Vec<TokenViolation> {
    let mut violations = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        if token.text.is_empty() {
            violations.push(TokenViolation::EmptyText { index });
        } else if token.furigana.is_some() && is_kana_only(&token.text) {
            violations.push(TokenViolation::KanaWithReading {
                index,
                text: token.text.clone(),
            });
        }
    }

    let actual = concat_text(tokens);
    if actual != source {
        violations.push(TokenViolation::Coverage {
            expected: source.to_string(),
            actual,
        });
    }

    violations
}

/// Surface text of the whole sequence
pub fn concat_text(tokens: &[FuriganaToken]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Why a single-token reading edit was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenEditError {
    #[error("Token index {index} out of range, sequence has {len} tokens")]
    OutOfRange { index: usize, len: usize },

    #[error("Token {index} ({text}) is kana and cannot carry a reading")]
    KanaToken { index: usize, text: String },
}

/// Copy of `tokens` with the reading at `index` replaced.
///
/// An empty `value` clears the reading. Kana-only tokens only accept a clear.
pub fn with_token_reading(
    tokens: &[FuriganaToken],
    index: usize,
    value: &str,
) -> Result<Vec<FuriganaToken>, TokenEditError> {
    let token = tokens.get(index).ok_or(TokenEditError::OutOfRange {
        index,
        len: tokens.len(),
    })?;

    if !value.is_empty() && is_kana_only(&token.text) {
        return Err(TokenEditError::KanaToken {
            index,
            text: token.text.clone(),
        });
    }

    let mut edited = tokens.to_vec();
    edited[index].furigana = (!value.is_empty()).then(|| value.to_string());
    Ok(edited)
}
