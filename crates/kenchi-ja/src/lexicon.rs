// Surname lexicon: katakana readings with positive weights.
//
// The on-disk artifact is a JSON object mapping each reading to a number,
// typically an estimated population count. Names attested without a count
// carry weight 1.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use kenchi_core::character::is_katakana;
use kenchi_fst::acceptor::trie_acceptor;
use kenchi_fst::vector::VectorFst;
use kenchi_fst::{Symbol, WEIGHT_ONE, Weight};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::alphabet::alphabet;

/// The curated artifact shipped with the crate.
const BUNDLED_JSON: &str = include_str!("../data/lexicon.json");

/// Error type for lexicon loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("malformed lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("empty reading")]
    EmptyReading,
    #[error("reading {reading:?} contains non-katakana character {ch:?}")]
    NotKatakana { reading: String, ch: char },
    #[error("reading {reading:?} has invalid weight {weight}")]
    InvalidWeight { reading: String, weight: f64 },
}

/// An immutable, validated surname lexicon.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: BTreeMap<String, Weight>,
    /// Readings encoded through the shared alphabet, in `entries` order.
    encoded: Vec<(Vec<Symbol>, Weight)>,
}

impl Lexicon {
    /// Build a lexicon from (reading, weight) pairs.
    ///
    /// Repeated readings aggregate by adding their weights. Every reading is
    /// validated; the first violation is returned.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (S, Weight)>,
        S: Into<String>,
    {
        let mut builder = LexiconBuilder::new();
        for (reading, weight) in entries {
            builder.add(reading, weight);
        }
        builder.build()
    }

    /// Parse a JSON artifact.
    ///
    /// A reading listed more than once aggregates like any other repeated
    /// observation: its weights add.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let Artifact(entries) = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Read and parse a JSON artifact from disk.
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let json = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The lexicon bundled with this crate.
    pub fn bundled() -> Result<Self, LexiconError> {
        Self::from_json(BUNDLED_JSON)
    }

    fn validated(entries: BTreeMap<String, Weight>) -> Result<Self, LexiconError> {
        let mut encoded = Vec::with_capacity(entries.len());
        for (reading, &weight) in &entries {
            if reading.is_empty() {
                return Err(LexiconError::EmptyReading);
            }
            if !weight.is_finite() || weight <= 0.0 {
                return Err(LexiconError::InvalidWeight {
                    reading: reading.clone(),
                    weight,
                });
            }
            let symbols = encode_reading(reading)?;
            encoded.push((symbols, weight));
        }
        tracing::debug!(entries = entries.len(), "loaded lexicon");
        Ok(Self { entries, encoded })
    }

    /// Number of distinct readings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight of `reading`, if present.
    pub fn weight(&self, reading: &str) -> Option<Weight> {
        self.entries.get(reading).copied()
    }

    /// Iterate over (reading, weight) in reading order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.entries.iter().map(|(r, &w)| (r.as_str(), w))
    }

    /// Build the weighted trie acceptor over the shared alphabet.
    pub fn acceptor(&self) -> VectorFst {
        trie_acceptor(self.encoded.clone())
    }
}

/// The JSON object in document order, repeated keys included.
struct Artifact(Vec<(String, Weight)>);

impl<'de> Deserialize<'de> for Artifact {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ArtifactVisitor)
    }
}

struct ArtifactVisitor;

impl<'de> Visitor<'de> for ArtifactVisitor {
    type Value = Artifact;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping katakana readings to weights")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Artifact, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((reading, weight)) = map.next_entry::<String, Weight>()? {
            entries.push((reading, weight));
        }
        Ok(Artifact(entries))
    }
}

fn encode_reading(reading: &str) -> Result<Vec<Symbol>, LexiconError> {
    reading
        .chars()
        .map(|ch| {
            alphabet()
                .symbol(ch)
                .filter(|_| is_katakana(ch))
                .ok_or_else(|| LexiconError::NotKatakana {
                    reading: reading.to_string(),
                    ch,
                })
        })
        .collect()
}

/// Accumulates surname observations into a [`Lexicon`].
///
/// Frequencies for the same reading add up. [`attest`](Self::attest) records
/// a name known to exist but without a count.
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    entries: BTreeMap<String, Weight>,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `frequency` more bearers of `reading`.
    pub fn add(&mut self, reading: impl Into<String>, frequency: Weight) -> &mut Self {
        *self.entries.entry(reading.into()).or_insert(0.0) += frequency;
        self
    }

    /// Record `reading` as attested, with weight 1 unless it already has one.
    pub fn attest(&mut self, reading: impl Into<String>) -> &mut Self {
        self.entries.entry(reading.into()).or_insert(WEIGHT_ONE);
        self
    }

    /// Validate and freeze.
    pub fn build(&self) -> Result<Lexicon, LexiconError> {
        Lexicon::validated(self.entries.clone())
    }
}
