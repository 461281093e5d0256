pub mod types;

pub use types::{FuriganaToken, GeneratedEntry, ParsedInput, VocabularyEntry, VocabularyInput};
