use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

static BRACKET_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[\s*([^\[\]]*?)\s*\]").expect("static pattern"));

pub trait Preprocessor {
    /// Clean a typed query before it reaches the input parser.
    ///
    /// NFKC folds full-width brackets, the ideographic space and half-width
    /// kana. Lenticular and tortoise-shell brackets also mark a reading, and
    /// whitespace hugging a bracketed reading is dropped.
    fn process(&self, text: &str) -> String {
        let text: String = text
            .nfkc()
            .filter(|c| !matches!(c, '\n' | '\r'))
            .map(|c| match c {
                '【' | '〔' => '[',
                '】' | '〕' => ']',
                c => c,
            })
            .collect();

        let text = SPACE_RUN.replace_all(text.trim(), " ");
        BRACKET_SPACING.replace_all(&text, "[${1}]").into_owned()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
