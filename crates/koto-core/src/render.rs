//! Ruby annotation of a focused term inside free text.
//!
//! Works for both reading encodings: a token array annotates each unit with
//! its own reading, a flat string annotates the whole term at once.

use std::fmt;

use html_escape::encode_text;

use crate::reading::Reading;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RubySpan {
    /// Text outside the focused term
    Text(String),
    /// Part of the focused term with a reading above it
    Ruby { base: String, reading: String },
    /// Part of the focused term without a reading
    Emphasis(String),
}

impl RubySpan {
    fn text(s: &str) -> Self {
        RubySpan::Text(s.to_string())
    }

    pub fn to_html(&self) -> String {
        match self {
            RubySpan::Text(text) => encode_text(text).into_owned(),
            RubySpan::Ruby { base, reading } => format!(
                "<ruby class=\"focus\">{}<rt>{}</rt></ruby>",
                encode_text(base),
                encode_text(reading)
            ),
            RubySpan::Emphasis(text) => {
                format!("<strong class=\"focus\">{}</strong>", encode_text(text))
            }
        }
    }
}

/// Bracket notation, `金[きん]メダル級[きゅう]`
impl fmt::Display for RubySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RubySpan::Text(text) | RubySpan::Emphasis(text) => f.write_str(text),
            RubySpan::Ruby { base, reading } => write!(f, "{base}[{reading}]"),
        }
    }
}

/// Annotate the first occurrence of `focused_term` in `content`.
///
/// Returns `None` for empty content. A missing or empty focused term means the
/// whole content. When the term does not occur in `content` the content comes
/// back as a single [`RubySpan::Text`].
///
/// Token readings are rendered as given, they are not checked against the
/// matched text.
pub fn render_with_ruby(
    content: &str,
    focused_term: Option<&str>,
    reading: &str,
) -> Option<Vec<RubySpan>> {
    if content.is_empty() {
        return None;
    }

    let target = focused_term.filter(|t| !t.is_empty()).unwrap_or(content);
    let Some(index) = content.find(target) else {
        return Some(vec![RubySpan::text(content)]);
    };

    let before = &content[..index];
    let after = &content[index + target.len()..];

    let mut spans = Vec::new();
    if !before.is_empty() {
        spans.push(RubySpan::text(before));
    }

    match Reading::parse(reading) {
        Reading::Tokens(tokens) => {
            spans.extend(tokens.into_iter().map(|token| match token.furigana {
                Some(reading) => RubySpan::Ruby {
                    base: token.text,
                    reading,
                },
                None => RubySpan::Emphasis(token.text),
            }));
        }
        Reading::Flat(flat) if is_blank(&flat) => {
            spans.push(RubySpan::Emphasis(target.to_string()));
        }
        Reading::Flat(flat) => {
            spans.push(RubySpan::Ruby {
                base: target.to_string(),
                reading: flat,
            });
        }
    }

    if !after.is_empty() {
        spans.push(RubySpan::text(after));
    }

    Some(spans)
}

/// Render straight to HTML, empty for empty content
pub fn render_html(content: &str, focused_term: Option<&str>, reading: &str) -> String {
    render_with_ruby(content, focused_term, reading)
        .map(|spans| spans.iter().map(RubySpan::to_html).collect())
        .unwrap_or_default()
}

/// Render straight to bracket notation, empty for empty content
pub fn render_text(content: &str, focused_term: Option<&str>, reading: &str) -> String {
    render_with_ruby(content, focused_term, reading)
        .map(|spans| spans.iter().map(ToString::to_string).collect())
        .unwrap_or_default()
}

/// Nothing worth showing above the text: an empty string or an empty token array
fn is_blank(flat: &str) -> bool {
    flat.is_empty()
        || serde_json::from_str::<Vec<serde_json::Value>>(flat).is_ok_and(|v| v.is_empty())
}
