// Exhaustive enumeration of accepting paths.

use crate::vector::VectorFst;
use crate::{StateId, Symbol, Weight};

/// One accepting path: the output labels along it and the final weight of
/// the state where it ends.
///
/// `output` holds the raw labels, null symbols included; decode it through a
/// symbol table to drop them. `weight` is the final weight only. Arc weights
/// are not accumulated.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedPath {
    pub output: Vec<Symbol>,
    pub weight: Weight,
}

/// One level of the explicit DFS stack.
struct Frame {
    state: StateId,
    next_arc: usize,
}

/// Enumerate every accepting path of `fst`, depth first.
///
/// A path is recorded each time the walk reaches a final state, and the walk
/// continues through it since final states may still have outgoing arcs.
/// Structurally distinct paths with identical output are all reported.
///
/// There is no cycle detection: the automaton must be acyclic. Every
/// automaton composed with a linear input acceptor is. An automaton without a
/// start state yields no paths.
pub fn accepted_paths(fst: &VectorFst) -> Vec<AcceptedPath> {
    let mut paths = Vec::new();
    let Some(start) = fst.start() else {
        return paths;
    };

    if let Some(weight) = fst.final_weight(start) {
        paths.push(AcceptedPath {
            output: Vec::new(),
            weight,
        });
    }

    // Invariant: output.len() == stack.len() - 1.
    let mut stack = vec![Frame {
        state: start,
        next_arc: 0,
    }];
    let mut output: Vec<Symbol> = Vec::new();

    while let Some(frame) = stack.last_mut() {
        let arcs = fst.arcs(frame.state);
        if frame.next_arc == arcs.len() {
            // Pop (backtrack up)
            stack.pop();
            output.pop();
            continue;
        }

        let arc = arcs[frame.next_arc];
        frame.next_arc += 1;

        // Push down
        output.push(arc.sym_out);
        if let Some(weight) = fst.final_weight(arc.target_state) {
            paths.push(AcceptedPath {
                output: output.clone(),
                weight,
            });
        }
        stack.push(Frame {
            state: arc.target_state,
            next_arc: 0,
        });
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::Arc;
    use crate::{EPSILON, WEIGHT_ONE};

    #[test]
    fn no_start_no_paths() {
        assert!(accepted_paths(&VectorFst::new()).is_empty());
    }

    #[test]
    fn final_start_yields_empty_output() {
        let mut fst = VectorFst::new();
        let s = fst.add_state();
        fst.set_start(s);
        fst.set_final(s, 4.0);
        assert_eq!(
            accepted_paths(&fst),
            vec![AcceptedPath {
                output: vec![],
                weight: 4.0
            }]
        );
    }

    #[test]
    fn walk_continues_past_final_states() {
        // 0 -a-> 1(final 2) -b-> 2(final 3)
        let mut fst = VectorFst::new();
        let s0 = fst.add_state();
        let s1 = fst.add_state();
        let s2 = fst.add_state();
        fst.set_start(s0);
        fst.set_final(s1, 2.0);
        fst.set_final(s2, 3.0);
        fst.add_arc(s0, Arc::identity(1, s1));
        fst.add_arc(s1, Arc::identity(2, s2));

        let paths = accepted_paths(&fst);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].output, vec![1]);
        assert_eq!(paths[0].weight, 2.0);
        assert_eq!(paths[1].output, vec![1, 2]);
        assert_eq!(paths[1].weight, 3.0);
    }

    #[test]
    fn distinct_derivations_are_not_merged() {
        // Two parallel routes emitting the same label, plus an epsilon detour.
        let mut fst = VectorFst::new();
        let s0 = fst.add_state();
        let s1 = fst.add_state();
        let s2 = fst.add_state();
        fst.set_start(s0);
        fst.set_final(s2, WEIGHT_ONE);
        fst.add_arc(s0, Arc::identity(7, s2));
        fst.add_arc(s0, Arc::epsilon(s1));
        fst.add_arc(s1, Arc::identity(7, s2));

        let paths = accepted_paths(&fst);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].output, vec![7]);
        assert_eq!(paths[1].output, vec![EPSILON, 7]);
    }

    #[test]
    fn dead_ends_contribute_nothing() {
        let mut fst = VectorFst::new();
        let s0 = fst.add_state();
        let s1 = fst.add_state();
        fst.set_start(s0);
        fst.add_arc(s0, Arc::identity(1, s1));
        assert!(accepted_paths(&fst).is_empty());
    }
}
