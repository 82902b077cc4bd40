//! Kana checks used when loading row tables.

/// Hiragana block, U+3040..=U+309F.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Non-empty and made only of hiragana or the prolonged sound mark `ー`.
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == 'ー')
}
