// Acceptor construction: single-string chains and weighted tries.

use crate::transition::Arc;
use crate::vector::VectorFst;
use crate::{StateId, Symbol, WEIGHT_ONE, Weight};

/// Build an acceptor for exactly one symbol sequence.
///
/// One state per position, identity arcs between consecutive states, and the
/// last state final with weight one.
pub fn linear_acceptor(symbols: &[Symbol]) -> VectorFst {
    let mut fst = VectorFst::new();
    let mut current = fst.add_state();
    fst.set_start(current);
    for &symbol in symbols {
        let next = fst.add_state();
        fst.add_arc(current, Arc::identity(symbol, next));
        current = next;
    }
    fst.set_final(current, WEIGHT_ONE);
    fst
}

/// Build a trie-shaped weighted acceptor.
///
/// Entries are processed in sorted order so each new sequence only adds
/// states for the suffix after its common prefix with the previous one; the
/// whole build is linear in the total number of symbols. The state where a
/// sequence ends is final with that sequence's weight. Repeated sequences
/// aggregate by adding their weights.
pub fn trie_acceptor(mut entries: Vec<(Vec<Symbol>, Weight)>) -> VectorFst {
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut fst = VectorFst::new();
    let root = fst.add_state();
    fst.set_start(root);

    // path[i] is the state reached after the first i symbols of `previous`.
    let mut path: Vec<StateId> = vec![root];
    let mut previous: &[Symbol] = &[];

    for (sequence, weight) in &entries {
        let shared = common_prefix_len(previous, sequence);
        path.truncate(shared + 1);
        for &symbol in &sequence[shared..] {
            let from = path[path.len() - 1];
            let to = fst.add_state();
            fst.add_arc(from, Arc::identity(symbol, to));
            path.push(to);
        }
        let end = path[path.len() - 1];
        let total = fst.final_weight(end).unwrap_or(0.0) + weight;
        fst.set_final(end, total);
        previous = sequence.as_slice();
    }

    fst
}

fn common_prefix_len(a: &[Symbol], b: &[Symbol]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
