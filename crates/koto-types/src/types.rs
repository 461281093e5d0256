use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One segmentation unit of a piece of source text.
///
/// `furigana` is `None` for pure kana units. The field is required on the
/// wire: `{"text": "の"}` is rejected, absence must be spelled `null`, and an
/// empty string stays an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuriganaToken {
    pub text: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub furigana: Option<String>,
}

impl FuriganaToken {
    pub fn new(text: impl Into<String>, furigana: Option<&str>) -> Self {
        Self {
            text: text.into(),
            furigana: furigana.map(str::to_string),
        }
    }

    /// Token with no reading
    pub fn kana(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            furigana: None,
        }
    }
}

/// A stored vocabulary note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub id: Uuid,
    /// Full source text, a whole phrase or a single word
    pub content: String,
    /// Sub-string of `content` the note is about, `None` means all of it
    #[serde(default)]
    pub focused_term: Option<String>,
    /// Flat reading or a JSON token array
    pub reading: String,
    pub meaning: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VocabularyEntry {
    /// The text the reading annotates
    pub fn target(&self) -> &str {
        match self.focused_term.as_deref() {
            Some(term) if !term.is_empty() => term,
            _ => &self.content,
        }
    }
}

/// Everything a create or update replaces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabularyInput {
    pub content: String,
    pub focused_term: Option<String>,
    pub reading: String,
    pub meaning: String,
}

/// Result of classifying a freeform query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedInput {
    pub target: String,
    pub reading: Option<String>,
    pub sentence: Option<String>,
}

/// Structured output of an entry generator.
///
/// Exactly two top-level fields, anything else is a schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratedEntry {
    pub reading: Vec<FuriganaToken>,
    pub meaning: String,
}
