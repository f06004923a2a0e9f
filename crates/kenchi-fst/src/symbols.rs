// Symbol table: char-to-code and code-to-char mapping.

use crate::{EPSILON, FstError, Symbol};
use hashbrown::HashMap;

/// Bijective mapping between a fixed character inventory and dense codes.
///
/// Codes are assigned in inventory order starting at 1. Code 0 is reserved
/// for [`EPSILON`] and has no character.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// Maps symbol code to its character (`None` for epsilon).
    symbol_chars: Vec<Option<char>>,
    /// Maps a character to its symbol code.
    char_to_symbol: HashMap<char, Symbol>,
}

impl SymbolTable {
    /// Build a table from an ordered character inventory.
    ///
    /// A character that occurs more than once keeps the code of its first
    /// occurrence, so the mapping stays bijective.
    pub fn new(inventory: impl IntoIterator<Item = char>) -> Self {
        let mut symbol_chars = vec![None];
        let mut char_to_symbol = HashMap::new();
        for ch in inventory {
            if char_to_symbol.contains_key(&ch) {
                continue;
            }
            char_to_symbol.insert(ch, symbol_chars.len() as Symbol);
            symbol_chars.push(Some(ch));
        }
        Self {
            symbol_chars,
            char_to_symbol,
        }
    }

    /// Number of codes, epsilon included.
    pub fn len(&self) -> usize {
        self.symbol_chars.len()
    }

    /// True when the inventory is empty (only epsilon is defined).
    pub fn is_empty(&self) -> bool {
        self.symbol_chars.len() == 1
    }

    /// Look up the code of a single character.
    pub fn symbol(&self, ch: char) -> Option<Symbol> {
        self.char_to_symbol.get(&ch).copied()
    }

    /// Look up the character of a code. Epsilon and out-of-range codes yield `None`.
    pub fn char_of(&self, symbol: Symbol) -> Option<char> {
        self.symbol_chars.get(symbol as usize).copied().flatten()
    }

    /// Encode every character of `text`.
    ///
    /// Fails on the first character outside the inventory, reporting its
    /// character position.
    pub fn encode(&self, text: &str) -> Result<Vec<Symbol>, FstError> {
        text.chars()
            .enumerate()
            .map(|(position, ch)| {
                self.symbol(ch)
                    .ok_or(FstError::UnknownSymbol { ch, position })
            })
            .collect()
    }

    /// Decode a code sequence into a printable string, dropping null symbols.
    pub fn decode(&self, symbols: &[Symbol]) -> String {
        symbols
            .iter()
            .filter(|&&s| s != EPSILON)
            .filter_map(|&s| self.char_of(s))
            .collect()
    }
}
