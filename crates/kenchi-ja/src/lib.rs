//! Japanese surname back-transliteration and name-order estimation.
//!
//! Given a romanized surname such as "Satō", "Satoh" or "SATO", this crate
//! recovers the katakana readings an attested surname could have, each
//! scored by how common the surname is. The scores also drive a heuristic
//! that puts a two-token personal name into given-name-first order.
//!
//! # Architecture
//!
//! - [`alphabet`] -- The fixed romaji/katakana symbol table
//! - [`romaji`] -- Syllable table and transliteration automaton builder
//! - [`lexicon`] -- Surname lexicon loading, validation and acceptor
//! - [`encoder`] -- Romanized input to linear acceptor
//! - [`order`] -- Orthographic and score-based ordering rules
//! - [`handle`] -- [`KenchiHandle`], the context object tying it together

pub mod alphabet;
pub mod encoder;
pub mod handle;
pub mod lexicon;
pub mod order;
pub mod romaji;

pub use handle::{Candidate, KenchiError, KenchiHandle};
pub use lexicon::{Lexicon, LexiconBuilder, LexiconError};
pub use order::DEFAULT_PRIOR;
