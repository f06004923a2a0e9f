// KenchiHandle: top-level entry point for surname back-transliteration.
//
// The handle owns the transliteration automaton, the lexicon and its
// acceptor. Their composition is input independent, so it is built on first
// use and shared by every later call; each call composes only its own small
// input acceptor against it.

use std::path::Path;
use std::sync::OnceLock;

use kenchi_fst::FstError;
use kenchi_fst::compose::compose;
use kenchi_fst::paths::accepted_paths;
use kenchi_fst::vector::VectorFst;

use crate::alphabet::alphabet;
use crate::encoder::encode_input;
use crate::lexicon::{Lexicon, LexiconError};
use crate::order::{Convention, DEFAULT_PRIOR, by_scores, convention, is_valid_prior};
use crate::romaji::build_transliterator;

/// Error type for handle construction and name ordering.
#[derive(Debug, thiserror::Error)]
pub enum KenchiError {
    #[error("prior must lie in [0, 1], got {0}")]
    InvalidPrior(f64),

    #[error("expected exactly 2 names, got {0}")]
    InvalidNameCount(usize),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    /// The transliteration table uses a character outside the alphabet.
    #[error("failed to build transliterator: {0}")]
    Transliterator(#[from] FstError),
}

/// One katakana reading of a romanized name, with its lexicon score.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Candidate {
    pub reading: String,
    pub score: f64,
}

/// Context object holding everything needed to answer queries.
///
/// Immutable after construction apart from the one-shot composition cache,
/// so a single handle can be shared across threads.
pub struct KenchiHandle {
    lexicon: Lexicon,
    transliterator: VectorFst,
    lexicon_acceptor: VectorFst,
    /// transliterator ∘ lexicon acceptor, built at most once.
    transducer: OnceLock<VectorFst>,
}

impl KenchiHandle {
    /// Create a handle over `lexicon`.
    pub fn new(lexicon: Lexicon) -> Result<Self, KenchiError> {
        let transliterator = build_transliterator(alphabet())?;
        let lexicon_acceptor = lexicon.acceptor();
        Ok(Self {
            lexicon,
            transliterator,
            lexicon_acceptor,
            transducer: OnceLock::new(),
        })
    }

    /// Create a handle over the lexicon bundled with this crate.
    pub fn with_bundled_lexicon() -> Result<Self, KenchiError> {
        Self::new(Lexicon::bundled()?)
    }

    /// Create a handle from a JSON lexicon artifact.
    pub fn from_json(json: &str) -> Result<Self, KenchiError> {
        Self::new(Lexicon::from_json(json)?)
    }

    /// Create a handle from a JSON lexicon file.
    pub fn from_path(path: &Path) -> Result<Self, KenchiError> {
        Self::new(Lexicon::from_path(path)?)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The cached transliterator ∘ lexicon composition.
    fn transducer(&self) -> &VectorFst {
        self.transducer.get_or_init(|| {
            let _span = tracing::debug_span!("build_transducer").entered();
            let fst = compose(&self.transliterator, &self.lexicon_acceptor);
            tracing::debug!(
                states = fst.num_states(),
                arcs = fst.num_arcs(),
                "composed transliterator with lexicon"
            );
            fst
        })
    }

    /// Every lexicon reading compatible with the romanized `text`.
    ///
    /// Sorted ascending by score, ties by reading. Text that cannot be
    /// encoded yields no candidates. Distinct derivations of the same
    /// reading are all reported.
    pub fn back_transliterate(&self, text: &str) -> Vec<Candidate> {
        let input = match encode_input(text, alphabet()) {
            Ok(input) => input,
            Err(e) => {
                tracing::debug!(text, error = %e, "input not encodable");
                return Vec::new();
            }
        };

        let composed = compose(&input, self.transducer());
        let mut candidates: Vec<Candidate> = accepted_paths(&composed)
            .into_iter()
            .map(|path| Candidate {
                reading: alphabet().decode(&path.output),
                score: path.weight,
            })
            .collect();
        candidates.sort_by(|a, b| {
            a.score
                .total_cmp(&b.score)
                .then_with(|| a.reading.cmp(&b.reading))
        });

        tracing::trace!(
            text,
            states = composed.num_states(),
            candidates = candidates.len(),
            "back-transliterated"
        );
        candidates
    }

    /// How likely `name` is to be a surname: the best candidate score, or
    /// 0 when there is none.
    pub fn score_as_surname(&self, name: &str) -> f64 {
        self.back_transliterate(name)
            .iter()
            .map(|c| c.score)
            .fold(0.0, f64::max)
    }

    /// Put a two-token name into given-name-first order.
    ///
    /// `prior` is the probability that the input is already given name
    /// first. Fails unless `prior` lies in [0, 1] and exactly two names are
    /// given.
    pub fn order_names<S: AsRef<str>>(
        &self,
        names: &[S],
        prior: f64,
    ) -> Result<Vec<String>, KenchiError> {
        if !is_valid_prior(prior) {
            return Err(KenchiError::InvalidPrior(prior));
        }
        let [first, second] = names else {
            return Err(KenchiError::InvalidNameCount(names.len()));
        };
        let (first, second) = (first.as_ref(), second.as_ref());

        let decision = match convention(first, second) {
            Convention::Undecided => by_scores(
                self.score_as_surname(first),
                self.score_as_surname(second),
                prior,
            ),
            decided => decided,
        };
        tracing::debug!(first, second, prior, ?decision, "ordered names");

        Ok(match decision {
            Convention::Swap => vec![second.to_string(), first.to_string()],
            _ => vec![first.to_string(), second.to_string()],
        })
    }

    /// [`order_names`](Self::order_names) with [`DEFAULT_PRIOR`].
    pub fn order_names_default<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<String>, KenchiError> {
        self.order_names(names, DEFAULT_PRIOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn small_handle() -> KenchiHandle {
        KenchiHandle::from_json(
            r#"{"サトウ": 757000, "サトオ": 1, "サト": 1, "イセ": 310, "タカシ": 140}"#,
        )
        .unwrap()
    }

    fn readings(handle: &KenchiHandle, text: &str) -> BTreeSet<String> {
        handle
            .back_transliterate(text)
            .into_iter()
            .map(|c| c.reading)
            .collect()
    }

    #[test]
    fn candidates_sorted_ascending() {
        let handle = small_handle();
        let candidates = handle.back_transliterate("SATO");
        assert!(candidates.len() >= 3);
        assert!(candidates.windows(2).all(|w| w[0].score <= w[1].score));
        assert_eq!(candidates.last().unwrap().reading, "サトウ");
        assert_eq!(candidates.last().unwrap().score, 757000.0);
    }

    #[test]
    fn ties_broken_by_reading() {
        let handle = small_handle();
        let low: Vec<_> = handle
            .back_transliterate("sato")
            .into_iter()
            .filter(|c| c.score == 1.0)
            .map(|c| c.reading)
            .collect();
        let mut sorted = low.clone();
        sorted.sort();
        assert_eq!(low, sorted);
    }

    #[test]
    fn unencodable_input_yields_nothing() {
        let handle = small_handle();
        assert!(handle.back_transliterate("@").is_empty());
        assert!(handle.back_transliterate("Sato Ito").is_empty());
        assert_eq!(handle.score_as_surname("@"), 0.0);
    }

    #[test]
    fn unknown_surname_scores_zero() {
        let handle = small_handle();
        assert!(handle.back_transliterate("yamada").is_empty());
        assert_eq!(handle.score_as_surname("yamada"), 0.0);
    }

    #[test]
    fn score_is_best_candidate() {
        let handle = small_handle();
        assert_eq!(handle.score_as_surname("Sato"), 757000.0);
        assert_eq!(handle.score_as_surname("Ise"), 310.0);
    }

    #[test]
    fn composition_order_does_not_matter() {
        let handle = small_handle();
        for text in ["sato", "satou", "ise", "takashi", "Satō"] {
            let input = encode_input(text, alphabet()).unwrap();
            let left = compose(
                &compose(&input, &handle.transliterator),
                &handle.lexicon_acceptor,
            );
            let right = compose(&input, handle.transducer());
            let collect = |fst: &VectorFst| {
                let mut found: Vec<_> = accepted_paths(fst)
                    .into_iter()
                    .map(|p| (alphabet().decode(&p.output), p.weight))
                    .collect();
                found.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
                found
            };
            assert_eq!(collect(&left), collect(&right), "{text}");
        }
    }

    #[test]
    fn transducer_built_once() {
        let handle = small_handle();
        assert!(handle.transducer.get().is_none());
        handle.back_transliterate("sato");
        let first: *const VectorFst = handle.transducer();
        handle.back_transliterate("ise");
        assert!(std::ptr::eq(first, handle.transducer()));
    }

    #[test]
    fn concurrent_first_use_shares_one_transducer() {
        let handle = small_handle();
        let built: Vec<usize> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| handle.transducer() as *const VectorFst as usize))
                .collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });
        assert!(built.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(readings(&handle, "Sato").len(), 3);
    }

    #[test]
    fn order_rejects_bad_prior() {
        let handle = small_handle();
        for prior in [1.5, -0.5, f64::NAN] {
            assert!(matches!(
                handle.order_names(&["Takashi", "Ise"], prior),
                Err(KenchiError::InvalidPrior(_))
            ));
        }
    }

    #[test]
    fn order_rejects_wrong_count() {
        let handle = small_handle();
        assert!(matches!(
            handle.order_names_default(&["Takashi", "Ise", "Sato"]),
            Err(KenchiError::InvalidNameCount(3))
        ));
        assert!(matches!(
            handle.order_names_default(&["Sato"]),
            Err(KenchiError::InvalidNameCount(1))
        ));
        let empty: [&str; 0] = [];
        assert!(matches!(
            handle.order_names_default(&empty),
            Err(KenchiError::InvalidNameCount(0))
        ));
    }

    #[test]
    fn order_by_score_and_prior() {
        let handle = small_handle();
        assert_eq!(
            handle.order_names(&["Takashi", "Ise"], 0.5).unwrap(),
            vec!["Takashi", "Ise"]
        );
        assert_eq!(
            handle.order_names(&["Takashi", "Ise"], 0.75).unwrap(),
            vec!["Ise", "Takashi"]
        );
    }

    #[test]
    fn order_accepts_owned_strings() {
        let handle = small_handle();
        let names = vec!["Sato".to_string(), "Takashi".to_string()];
        assert_eq!(
            handle.order_names_default(&names).unwrap(),
            vec!["Takashi", "Sato"]
        );
    }
}
