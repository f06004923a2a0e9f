// Romanized input -> linear acceptor

use kenchi_core::character::fold_romaji;
use kenchi_fst::FstError;
use kenchi_fst::acceptor::linear_acceptor;
use kenchi_fst::symbols::SymbolTable;
use kenchi_fst::vector::VectorFst;

use crate::alphabet::SENTINEL;

/// Fold `text` (NFKD, lowercase), append the end-of-input sentinel and build
/// a linear acceptor over `alphabet`.
///
/// Fails on the first character outside the alphabet. Empty text yields an
/// acceptor for the sentinel alone.
pub fn encode_input(text: &str, alphabet: &SymbolTable) -> Result<VectorFst, FstError> {
    let mut folded = fold_romaji(text);
    folded.push(SENTINEL);
    let symbols = alphabet.encode(&folded)?;
    Ok(linear_acceptor(&symbols))
}
