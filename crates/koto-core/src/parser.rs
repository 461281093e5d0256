use std::sync::LazyLock;

use koto_types::ParsedInput;
use regex::Regex;

/// `...before[target]after...`, greedy prefix so the last bracket pair wins
static BRACKET_IN_SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+)\[(.+?)\](.+)").expect("static pattern"));

/// `target[reading]` spanning the whole input
static BRACKET_READING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\[(.+?)\]$").expect("static pattern"));

/// Classify a freeform query.
///
/// Tried in order, first match wins:
/// 1. `明日[あした]は晴れる`: text on both sides of a bracket pair. The bracketed
///    part is the target and the brackets are dropped from the sentence.
/// 2. `春[はる]`: a word followed by its reading.
/// 3. anything else is a bare target.
pub fn parse_input(text: &str) -> ParsedInput {
    if let Some(caps) = BRACKET_IN_SENTENCE.captures(text) {
        let target = &caps[2];
        return ParsedInput {
            target: target.trim().to_string(),
            reading: None,
            sentence: Some(format!("{}{}{}", &caps[1], target, &caps[3]).trim().to_string()),
        };
    }

    if let Some(caps) = BRACKET_READING.captures(text) {
        return ParsedInput {
            target: caps[1].trim().to_string(),
            reading: Some(caps[2].trim().to_string()),
            sentence: None,
        };
    }

    ParsedInput {
        target: text.trim().to_string(),
        reading: None,
        sentence: None,
    }
}
