// The fixed romaji/katakana alphabet shared by every automaton.

use std::sync::LazyLock;

use kenchi_core::character::{COMBINING_CIRCUMFLEX, COMBINING_MACRON, katakana};
use kenchi_fst::symbols::SymbolTable;

/// End-of-input marker appended to every encoded input.
pub const SENTINEL: char = '$';

static ALPHABET: LazyLock<SymbolTable> = LazyLock::new(|| SymbolTable::new(inventory()));

/// The process-wide symbol table.
///
/// Inventory, in code order: `a`-`z`, `A`-`Z`, combining macron, combining
/// circumflex, apostrophe, hyphen, the sentinel, then the katakana block.
pub fn alphabet() -> &'static SymbolTable {
    &ALPHABET
}

fn inventory() -> impl Iterator<Item = char> {
    ('a'..='z')
        .chain('A'..='Z')
        .chain([COMBINING_MACRON, COMBINING_CIRCUMFLEX, '\'', '-', SENTINEL])
        .chain(katakana())
}
