// Character inventory constants and Unicode folding

use std::ops::RangeInclusive;

use unicode_normalization::UnicodeNormalization;

// ---------------------------------------------------------------------------
// Romaji diacritics
// ---------------------------------------------------------------------------

/// Long-vowel mark in Hepburn romanization (ō, ū).
pub const COMBINING_MACRON: char = '\u{0304}';

/// Long-vowel mark in Kunrei-shiki and Nihon-shiki romanization (ô, û).
pub const COMBINING_CIRCUMFLEX: char = '\u{0302}';

// ---------------------------------------------------------------------------
// Katakana block
// ---------------------------------------------------------------------------

/// First katakana letter: small a (ァ).
pub const KATAKANA_FIRST: char = '\u{30A1}';

/// Last katakana letter: vo (ヺ). The prolonged sound mark (ー) lies outside.
pub const KATAKANA_LAST: char = '\u{30FA}';

/// The contiguous katakana letter range, ァ through ヺ.
pub fn katakana() -> RangeInclusive<char> {
    KATAKANA_FIRST..=KATAKANA_LAST
}

/// Check whether a character lies in the katakana letter range.
pub fn is_katakana(c: char) -> bool {
    katakana().contains(&c)
}

// ---------------------------------------------------------------------------
// Folding
// ---------------------------------------------------------------------------

/// Fold romanized text for transliteration.
///
/// Applies compatibility decomposition (NFKD), which separates base vowels
/// from combining macrons and circumflexes and maps fullwidth Latin letters
/// to ASCII, then lowercases.
pub fn fold_romaji(text: &str) -> String {
    text.nfkd().flat_map(char::to_lowercase).collect()
}

/// Fold a name token for case inspection.
///
/// Applies compatibility composition (NFKC) so that a decomposed "Ō" is
/// classified the same as the precomposed letter.
pub fn fold_token(text: &str) -> String {
    text.nfkc().collect()
}
