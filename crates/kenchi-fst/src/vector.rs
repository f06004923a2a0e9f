// Adjacency-list automaton.

use crate::transition::Arc;
use crate::{StateId, Weight};

#[derive(Debug, Clone, Default)]
struct StateData {
    arcs: Vec<Arc>,
    final_weight: Option<Weight>,
}

/// Weighted automaton stored as one arc list per state.
///
/// States are created with [`add_state`](Self::add_state) and are only ever
/// referenced by the automaton that created them. Builders mutate a
/// `VectorFst` while constructing it; everything downstream treats it as
/// immutable.
#[derive(Clone, Default)]
pub struct VectorFst {
    states: Vec<StateData>,
    start: Option<StateId>,
}

impl std::fmt::Debug for VectorFst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorFst")
            .field("state_count", &self.num_states())
            .field("arc_count", &self.num_arcs())
            .field("start", &self.start)
            .finish()
    }
}

impl VectorFst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh, non-final state with no arcs.
    pub fn add_state(&mut self) -> StateId {
        self.states.push(StateData::default());
        (self.states.len() - 1) as StateId
    }

    pub fn set_start(&mut self, state: StateId) {
        debug_assert!(self.contains(state), "start state {state} not in automaton");
        self.start = Some(state);
    }

    pub fn set_final(&mut self, state: StateId, weight: Weight) {
        self.states[state as usize].final_weight = Some(weight);
    }

    /// Add an arc leaving `from`. Both endpoints must belong to this automaton.
    pub fn add_arc(&mut self, from: StateId, arc: Arc) {
        debug_assert!(
            self.contains(arc.target_state),
            "arc target {} not in automaton",
            arc.target_state
        );
        self.states[from as usize].arcs.push(arc);
    }

    pub fn start(&self) -> Option<StateId> {
        self.start
    }

    /// Final weight of `state`, or `None` if it is not final.
    pub fn final_weight(&self, state: StateId) -> Option<Weight> {
        self.states
            .get(state as usize)
            .and_then(|data| data.final_weight)
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.final_weight(state).is_some()
    }

    /// Outgoing arcs of `state` in insertion order.
    pub fn arcs(&self, state: StateId) -> &[Arc] {
        self.states
            .get(state as usize)
            .map(|data| data.arcs.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, state: StateId) -> bool {
        (state as usize) < self.states.len()
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn num_arcs(&self) -> usize {
        self.states.iter().map(|data| data.arcs.len()).sum()
    }

    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.states.len()).map(|s| s as StateId)
    }
}
