// Synchronized product of two automata.

use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::transition::Arc;
use crate::vector::VectorFst;
use crate::{EPSILON, StateId};

/// Compose `a` (mapping X to Y) with `b` (reading Y).
///
/// States of the result are the pairs `(qa, qb)` reachable from the pair of
/// start states; pairs are discovered breadth-first and nothing unreachable
/// is ever allocated. For each pair:
///
/// - an arc of `a` with output `y` pairs with every arc of `b` reading `y`,
///   giving an arc labeled (input of `a`, output of `b`) with the product of
///   both weights;
/// - an arc of `a` with null output advances `a` alone;
/// - an arc of `b` with null input advances `b` alone.
///
/// A pair is final when both halves are final, with the product of both final
/// weights. No epsilon filter is applied, so callers must not pair null-output
/// arcs in `a` with null-input arcs in `b` if they need one path per
/// derivation; every composition in this workspace has null symbols on at
/// most one side of the shared alphabet.
pub fn compose(a: &VectorFst, b: &VectorFst) -> VectorFst {
    let mut pairs = PairStates::default();
    let (Some(start_a), Some(start_b)) = (a.start(), b.start()) else {
        return pairs.result;
    };

    let start = pairs.state_for(start_a, start_b);
    pairs.result.set_start(start);

    while let Some((qa, qb, q)) = pairs.queue.pop_front() {
        if let (Some(wa), Some(wb)) = (a.final_weight(qa), b.final_weight(qb)) {
            pairs.result.set_final(q, wa * wb);
        }

        for arc_a in a.arcs(qa) {
            if !arc_a.emits_output() {
                let target = pairs.state_for(arc_a.target_state, qb);
                pairs
                    .result
                    .add_arc(q, Arc::new(arc_a.sym_in, EPSILON, arc_a.weight, target));
                continue;
            }
            for arc_b in b.arcs(qb).iter().filter(|arc| arc.sym_in == arc_a.sym_out) {
                let target = pairs.state_for(arc_a.target_state, arc_b.target_state);
                pairs.result.add_arc(
                    q,
                    Arc::new(
                        arc_a.sym_in,
                        arc_b.sym_out,
                        arc_a.weight * arc_b.weight,
                        target,
                    ),
                );
            }
        }

        for arc_b in b.arcs(qb).iter().filter(|arc| !arc.consumes_input()) {
            let target = pairs.state_for(qa, arc_b.target_state);
            pairs
                .result
                .add_arc(q, Arc::new(EPSILON, arc_b.sym_out, arc_b.weight, target));
        }
    }

    tracing::trace!(
        states = pairs.result.num_states(),
        arcs = pairs.result.num_arcs(),
        "composed"
    );
    pairs.result
}

/// Pair-to-state bookkeeping for [`compose`].
#[derive(Default)]
struct PairStates {
    result: VectorFst,
    index: HashMap<(StateId, StateId), StateId>,
    queue: VecDeque<(StateId, StateId, StateId)>,
}

impl PairStates {
    /// Return the result state of a pair, allocating and queueing it on first sight.
    fn state_for(&mut self, qa: StateId, qb: StateId) -> StateId {
        if let Some(&state) = self.index.get(&(qa, qb)) {
            return state;
        }
        let state = self.result.add_state();
        self.index.insert((qa, qb), state);
        self.queue.push_back((qa, qb, state));
        state
    }
}
