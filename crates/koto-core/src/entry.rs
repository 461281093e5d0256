use koto_types::VocabularyInput;

use crate::reading::Reading;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Content is empty")]
    EmptyContent,

    #[error("No reading tokens, generate or enter them first")]
    MissingTokens,

    #[error("Meaning is empty")]
    EmptyMeaning,
}

/// Gate applied before an entry is saved.
///
/// A flat reading counts as missing tokens: new entries are always stored in
/// the tokenized encoding.
pub fn check_input(input: &VocabularyInput) -> Result<(), InputError> {
    if input.content.trim().is_empty() {
        return Err(InputError::EmptyContent);
    }
    if Reading::parse(&input.reading).tokens_or_empty().is_empty() {
        return Err(InputError::MissingTokens);
    }
    if input.meaning.trim().is_empty() {
        return Err(InputError::EmptyMeaning);
    }
    Ok(())
}
