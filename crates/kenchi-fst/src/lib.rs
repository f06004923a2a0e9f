//! Weighted finite-state automaton engine.
//!
//! This crate provides the small set of automaton operations needed to
//! back-transliterate text through a chain of transducers: building automata
//! by hand, composing them, and enumerating every accepting path.
//!
//! # Architecture
//!
//! - [`symbols`] -- Symbol table (char-to-code and code-to-char mapping)
//! - [`transition`] -- Arc struct shared by every automaton
//! - [`vector`] -- Mutable-then-frozen adjacency-list automaton
//! - [`acceptor`] -- Linear-chain and trie-shaped acceptor construction
//! - [`compose`] -- Synchronized product of two automata
//! - [`paths`] -- Exhaustive accepting-path enumeration (explicit DFS stack)
//!
//! Weights are plain non-negative reals. Paths combine by multiplication with
//! [`WEIGHT_ONE`] as identity; frequency aggregation adds.

pub mod acceptor;
pub mod compose;
pub mod paths;
pub mod symbols;
pub mod transition;
pub mod vector;

/// Dense integer code of an alphabet symbol.
pub type Symbol = u32;

/// Index of a state inside one automaton.
pub type StateId = u32;

/// Arc and final-state weight.
pub type Weight = f64;

/// The null symbol: consumed or emitted without any corresponding character.
pub const EPSILON: Symbol = 0;

/// Multiplicative identity of [`Weight`].
pub const WEIGHT_ONE: Weight = 1.0;

/// Error type for symbol lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FstError {
    #[error("unknown symbol {ch:?} at position {position}")]
    UnknownSymbol { ch: char, position: usize },
}
