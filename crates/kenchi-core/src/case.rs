// Case shape of name tokens

use crate::character::fold_token;

/// Characters allowed inside an all-uppercase token besides uppercase letters.
const UPPERCASE_JOINERS: &[char] = &['\'', '-'];

/// Check whether a token looks like a bare initial: one uppercase letter,
/// optionally followed by a period ("K", "K.").
///
/// The token is NFKC-folded first, so fullwidth forms qualify.
pub fn is_initial(token: &str) -> bool {
    let folded = fold_token(token);
    let mut chars = folded.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, _) => c.is_uppercase(),
        (Some(c), Some('.'), None) => c.is_uppercase(),
        _ => false,
    }
}

/// Check whether a token is written entirely in uppercase.
///
/// Apostrophes and hyphens may appear anywhere ("O'HARA", "TAKE-UCHI"), but
/// at least one uppercase letter is required. The token is NFKC-folded
/// first, so a decomposed "SHŌ" counts.
pub fn is_all_uppercase(token: &str) -> bool {
    let folded = fold_token(token);
    folded.chars().any(char::is_uppercase)
        && folded
            .chars()
            .all(|c| c.is_uppercase() || UPPERCASE_JOINERS.contains(&c))
}
