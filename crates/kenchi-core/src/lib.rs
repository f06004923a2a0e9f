//! Shared text utilities for romanized Japanese names.
//!
//! - [`character`] -- Character inventory constants and Unicode folding
//! - [`case`] -- Case shape of name tokens (bare initials, all-uppercase)

pub mod case;
pub mod character;
