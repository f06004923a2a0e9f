//! Romaji to katakana transliteration automaton.
//!
//! The automaton is generated from a declarative table of syllable
//! correspondences. It accepts romanizations in Hepburn,
//! Kunrei-shiki, Nihon-shiki, passport Hepburn and wapuro conventions, and
//! emits every katakana spelling compatible with them. Input must end with
//! the `$` sentinel.
//!
//! Every arc weight is one. Ranking is left entirely to the lexicon.

mod table;

use hashbrown::HashMap;
use kenchi_fst::symbols::SymbolTable;
use kenchi_fst::transition::Arc;
use kenchi_fst::vector::VectorFst;
use kenchi_fst::{EPSILON, FstError, StateId, Symbol, WEIGHT_ONE};

use table::CORRESPONDENCES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Vowel {
    A,
    I,
    U,
    E,
    O,
}

/// Consonant groups that can be doubled with a small tsu (ッ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Gate {
    /// s, sh, z, j
    S,
    /// t, ch, ts, d
    T,
    K,
    G,
    P,
    B,
}

/// Named states of the transliteration automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Node {
    /// Syllable boundary; the start state.
    Start,
    /// Reached by the sentinel; the only final state.
    Accept,
    /// After an "n" that may be an onset or the moraic nasal.
    Nasal,
    /// After an optional "m" standing for ン before p or b.
    Labial,
    /// Past the optional doubling of a consonant group.
    Geminate(Gate),
    /// After a palatalized onset, waiting for a, u or o.
    SmallY,
    /// After a vowel, with an optional length mark pending.
    Long(Vowel),
}

/// One table row: every `inputs` spelling paired with every `outputs`
/// spelling on a path from `from` to `to`. `""` is the null string.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Correspondence {
    pub from: Node,
    pub inputs: &'static [&'static str],
    pub outputs: &'static [&'static str],
    pub to: Node,
}

/// Maps named nodes to state ids, allocating on first sight.
struct Builder<'a> {
    fst: VectorFst,
    nodes: HashMap<Node, StateId>,
    alphabet: &'a SymbolTable,
}

impl<'a> Builder<'a> {
    fn new(alphabet: &'a SymbolTable) -> Self {
        Self {
            fst: VectorFst::new(),
            nodes: HashMap::new(),
            alphabet,
        }
    }

    fn node(&mut self, node: Node) -> StateId {
        if let Some(&id) = self.nodes.get(&node) {
            return id;
        }
        let id = self.fst.add_state();
        self.nodes.insert(node, id);
        id
    }

    /// Add one input/output spelling pair as a chain of arcs.
    ///
    /// The shorter side is padded with null symbols at the end. Intermediate
    /// states are fresh; the last arc lands directly on `to`. Two null strings
    /// give a single null arc.
    fn add_pair(
        &mut self,
        from: StateId,
        input: &str,
        output: &str,
        to: StateId,
    ) -> Result<(), FstError> {
        let input = self.alphabet.encode(input)?;
        let output = self.alphabet.encode(output)?;
        let len = input.len().max(output.len()).max(1);

        let mut state = from;
        for i in 0..len {
            let target = if i + 1 == len { to } else { self.fst.add_state() };
            let sym_in = padded(&input, i);
            let sym_out = padded(&output, i);
            self.fst.add_arc(state, Arc::new(sym_in, sym_out, WEIGHT_ONE, target));
            state = target;
        }
        Ok(())
    }

    fn add_row(&mut self, row: &Correspondence) -> Result<(), FstError> {
        let from = self.node(row.from);
        let to = self.node(row.to);
        for input in row.inputs {
            for output in row.outputs {
                self.add_pair(from, input, output, to)?;
            }
        }
        Ok(())
    }
}

fn padded(symbols: &[Symbol], i: usize) -> Symbol {
    symbols.get(i).copied().unwrap_or(EPSILON)
}

/// Build the transliteration automaton over `alphabet`.
///
/// Fails only if the alphabet lacks a character used by the correspondence
/// table.
pub fn build_transliterator(alphabet: &SymbolTable) -> Result<VectorFst, FstError> {
    let mut builder = Builder::new(alphabet);

    let start = builder.node(Node::Start);
    builder.fst.set_start(start);
    let accept = builder.node(Node::Accept);
    builder.fst.set_final(accept, WEIGHT_ONE);

    for row in CORRESPONDENCES {
        builder.add_row(row)?;
    }

    tracing::debug!(
        states = builder.fst.num_states(),
        arcs = builder.fst.num_arcs(),
        "built transliterator"
    );
    Ok(builder.fst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{SENTINEL, alphabet};
    use kenchi_fst::acceptor::linear_acceptor;
    use kenchi_fst::compose::compose;
    use kenchi_fst::paths::accepted_paths;
    use std::collections::BTreeSet;

    fn transliterator() -> VectorFst {
        build_transliterator(alphabet()).unwrap()
    }

    /// All katakana spellings the bare automaton produces for `romaji`.
    fn spellings(romaji: &str) -> BTreeSet<String> {
        let mut text = romaji.to_string();
        text.push(SENTINEL);
        let input = linear_acceptor(&alphabet().encode(&text).unwrap());
        let composed = compose(&input, &transliterator());
        accepted_paths(&composed)
            .iter()
            .map(|p| alphabet().decode(&p.output))
            .collect()
    }

    #[test]
    fn table_is_covered_by_alphabet() {
        let fst = transliterator();
        assert!(fst.start().is_some());
        assert!(fst.num_arcs() > CORRESPONDENCES.len());
    }

    #[test]
    fn single_final_state() {
        let fst = transliterator();
        let finals: Vec<_> = fst.states().filter(|&s| fst.is_final(s)).collect();
        assert_eq!(finals.len(), 1);
        assert_eq!(fst.final_weight(finals[0]), Some(WEIGHT_ONE));
    }

    #[test]
    fn every_arc_has_unit_weight() {
        let fst = transliterator();
        for s in fst.states() {
            assert!(fst.arcs(s).iter().all(|a| a.weight == WEIGHT_ONE));
        }
    }

    #[test]
    fn null_input_arcs_are_acyclic() {
        // Walking only null-input arcs must never revisit a state.
        let fst = transliterator();
        for s in fst.states() {
            let mut stack = vec![(s, vec![s])];
            while let Some((state, seen)) = stack.pop() {
                for arc in fst.arcs(state).iter().filter(|a| !a.consumes_input()) {
                    assert!(!seen.contains(&arc.target_state), "null-input cycle at {state}");
                    let mut next = seen.clone();
                    next.push(arc.target_state);
                    stack.push((arc.target_state, next));
                }
            }
        }
    }

    #[test]
    fn sentinel_alone_gives_empty_reading() {
        assert_eq!(spellings(""), BTreeSet::from([String::new()]));
    }

    #[test]
    fn missing_sentinel_is_rejected() {
        let input = linear_acceptor(&alphabet().encode("sa").unwrap());
        assert!(accepted_paths(&compose(&input, &transliterator())).is_empty());
    }

    #[test]
    fn plain_syllable() {
        assert!(spellings("sa").contains("サ"));
        assert!(spellings("sa").contains("サア"));
        assert!(!spellings("sa").contains("ザ"));
    }

    #[test]
    fn long_vowel_markings() {
        for romaji in ["sho\u{0304}", "sho\u{0302}", "shoh", "shou"] {
            assert!(spellings(romaji).contains("ショウ"), "{romaji}");
        }
        assert!(spellings("sho").contains("ショウ"));
        assert!(spellings("sho").contains("ショ"));
    }

    #[test]
    fn kunrei_and_hepburn_agree() {
        assert_eq!(spellings("tusima"), spellings("tsushima"));
        assert_eq!(spellings("tyano"), spellings("chano"));
    }

    #[test]
    fn gemination() {
        assert!(spellings("teppou").contains("テッポウ"));
        assert!(spellings("betchaku").contains("ベッチャク"));
        assert!(spellings("becchaku").contains("ベッチャク"));
    }

    #[test]
    fn moraic_nasal_spellings() {
        for romaji in ["shinyagaito", "shin'yagaito", "shin-yagaito"] {
            assert!(spellings(romaji).contains("シンヤガイト"), "{romaji}");
        }
        assert!(spellings("sampei").contains("サンペイ"));
        assert!(spellings("sanpei").contains("サンペイ"));
    }

    #[test]
    fn palatalized_rows_emit_katakana() {
        assert!(spellings("kyo").contains("キョ"));
        assert!(spellings("gyu").contains("ギュ"));
        assert!(spellings("ryu").contains("リュ"));
        assert!(spellings("nya").contains("ニャ"));
    }

    #[test]
    fn nasal_u_lengthens_with_u() {
        assert!(spellings("nuu").contains("ヌウ"));
        assert!(!spellings("nuu").contains("ヌエ"));
    }

    #[test]
    fn voiced_ambiguity() {
        let zu = spellings("zu");
        assert!(zu.contains("ズ"));
        assert!(zu.contains("ヅ"));
        assert!(spellings("ji").contains("ヂ"));
    }

    #[test]
    fn unparseable_romaji_yields_nothing() {
        assert!(spellings("xq").is_empty());
        assert!(spellings("l").is_empty());
    }
}
