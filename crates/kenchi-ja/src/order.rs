// Given/family name order estimation.
//
// Orthographic conventions decide first: a bare initial is a given name and
// is written first; a name in all capitals is the family name and is written
// last. Only when neither applies do lexicon scores decide.

use kenchi_core::case::{is_all_uppercase, is_initial};

/// Prior probability that a name pair arrives already ordered given name
/// first.
pub const DEFAULT_PRIOR: f64 = 0.5;

/// Outcome of the orthographic checks on a name pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// The pair is already given name first.
    Keep,
    /// The pair is family name first.
    Swap,
    /// No convention applies; fall through to scoring.
    Undecided,
}

/// Apply the initial and all-uppercase conventions to `(first, second)`.
pub fn convention(first: &str, second: &str) -> Convention {
    match (is_initial(first), is_initial(second)) {
        (false, true) => return Convention::Swap,
        (true, false) => return Convention::Keep,
        _ => {}
    }
    match (is_all_uppercase(first), is_all_uppercase(second)) {
        (true, false) => Convention::Swap,
        (false, true) => Convention::Keep,
        _ => Convention::Undecided,
    }
}

/// Decide by surname likelihood.
///
/// The pair is reversed when the first name's score, weighted by `prior`,
/// exceeds the second's, weighted by `1 - prior`. Ties keep the input order.
pub fn by_scores(first_score: f64, second_score: f64, prior: f64) -> Convention {
    if first_score * prior > second_score * (1.0 - prior) {
        Convention::Swap
    } else {
        Convention::Keep
    }
}

/// Check that `prior` is a probability.
pub fn is_valid_prior(prior: f64) -> bool {
    (0.0..=1.0).contains(&prior)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_goes_first() {
        assert_eq!(convention("K.", "Yoshida"), Convention::Keep);
        assert_eq!(convention("Yoshida", "K."), Convention::Swap);
        assert_eq!(convention("A", "Oshiro"), Convention::Keep);
    }

    #[test]
    fn two_initials_are_undecided() {
        assert_eq!(convention("K.", "Y."), Convention::Undecided);
    }

    #[test]
    fn uppercase_goes_last() {
        assert_eq!(convention("Shougo", "ITO"), Convention::Keep);
        assert_eq!(convention("ITO", "Shougo"), Convention::Swap);
        assert_eq!(convention("SHŌ", "Ito"), Convention::Swap);
    }

    #[test]
    fn both_uppercase_is_undecided() {
        assert_eq!(convention("KANA", "NAKAJIMA"), Convention::Undecided);
        assert_eq!(convention("Kaori", "Sato"), Convention::Undecided);
    }

    #[test]
    fn initial_check_precedes_uppercase_check() {
        // "ITO" is all uppercase but "K" is an initial.
        assert_eq!(convention("ITO", "K"), Convention::Swap);
    }

    #[test]
    fn scores_weighted_by_prior() {
        assert_eq!(by_scores(140.0, 310.0, 0.5), Convention::Keep);
        assert_eq!(by_scores(140.0, 310.0, 0.75), Convention::Swap);
        assert_eq!(by_scores(0.0, 0.0, DEFAULT_PRIOR), Convention::Keep);
        assert_eq!(by_scores(1.0, 0.0, DEFAULT_PRIOR), Convention::Swap);
    }

    #[test]
    fn prior_range() {
        assert!(is_valid_prior(0.0));
        assert!(is_valid_prior(DEFAULT_PRIOR));
        assert!(is_valid_prior(1.0));
        assert!(!is_valid_prior(1.5));
        assert!(!is_valid_prior(-0.1));
        assert!(!is_valid_prior(f64::NAN));
    }
}
