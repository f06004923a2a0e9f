// Arc struct shared by every automaton in the engine.

use crate::{EPSILON, StateId, Symbol, WEIGHT_ONE, Weight};

/// A labeled, weighted transition.
///
/// The source state is implicit: arcs are stored in the adjacency list of
/// the state they leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub sym_in: Symbol,
    pub sym_out: Symbol,
    pub weight: Weight,
    pub target_state: StateId,
}

impl Arc {
    #[inline]
    pub fn new(sym_in: Symbol, sym_out: Symbol, weight: Weight, target_state: StateId) -> Self {
        Self {
            sym_in,
            sym_out,
            weight,
            target_state,
        }
    }

    /// An acceptor arc: input and output carry the same symbol.
    #[inline]
    pub fn identity(symbol: Symbol, target_state: StateId) -> Self {
        Self::new(symbol, symbol, WEIGHT_ONE, target_state)
    }

    /// An arc that consumes and emits nothing.
    #[inline]
    pub fn epsilon(target_state: StateId) -> Self {
        Self::new(EPSILON, EPSILON, WEIGHT_ONE, target_state)
    }

    #[inline]
    pub fn consumes_input(&self) -> bool {
        self.sym_in != EPSILON
    }

    #[inline]
    pub fn emits_output(&self) -> bool {
        self.sym_out != EPSILON
    }
}
