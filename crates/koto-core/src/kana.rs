//! Fixed codepoint tests for the two phonetic scripts.

const HIRAGANA: std::ops::RangeInclusive<char> = '\u{3040}'..='\u{309F}';
const KATAKANA: std::ops::RangeInclusive<char> = '\u{30A0}'..='\u{30FF}';

pub fn is_hiragana(c: char) -> bool {
    HIRAGANA.contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    KATAKANA.contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// True when every character is hiragana or katakana.
///
/// Vacuously true for the empty string.
pub fn is_kana_only(text: &str) -> bool {
    text.chars().all(is_kana)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_scripts() {
        assert!(is_kana_only("ひらがな"));
        assert!(is_kana_only("カタカナ"));
        assert!(is_kana_only("メダル"));
        // prolonged sound mark and middle dot sit in the katakana block
        assert!(is_kana_only("ラーメン・スープ"));
        assert!(!is_kana_only("金"));
        assert!(!is_kana_only("食べる"));
        assert!(!is_kana_only("abc"));
        // halfwidth katakana is outside the block
        assert!(!is_kana_only("ｶﾀｶﾅ"));
    }

    #[test]
    fn block_edges() {
        assert!(is_hiragana('\u{3040}'));
        assert!(is_hiragana('\u{309F}'));
        assert!(is_katakana('\u{30A0}'));
        assert!(is_katakana('\u{30FF}'));
        assert!(!is_kana('\u{303F}'));
        assert!(!is_kana('\u{3100}'));
    }
}
