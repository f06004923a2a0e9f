// kenchi-translit: Back-transliterate romanized surnames to katakana.
//
// Prints every attested reading of each word with its score, ascending.
// Words come from the command line, or from stdin (one per line) when none
// are given.
//
// Usage:
//   kenchi-translit [-l LEXICON] [--json] [WORD...]

use std::io::{self, Write};

use clap::Parser;
use kenchi_cli::CommonArgs;
use kenchi_ja::KenchiHandle;

#[derive(Parser)]
#[command(
    name = "kenchi-translit",
    about = "Back-transliterate romanized Japanese surnames to katakana"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    /// Print one JSON object per word instead of text
    #[arg(long)]
    json: bool,
    /// Words to transliterate (read from stdin when omitted)
    words: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    kenchi_cli::init_tracing();

    let handle = kenchi_cli::load_handle(cli.common.lexicon.as_deref())
        .unwrap_or_else(|e| kenchi_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut emit = |word: &str| {
        if let Err(e) = write_word(&handle, word, cli.json, &mut out) {
            kenchi_cli::fatal(&format!("failed to write output: {e}"));
        }
    };

    if cli.words.is_empty() {
        for word in kenchi_cli::stdin_lines() {
            emit(&word);
        }
    } else {
        for word in &cli.words {
            emit(word);
        }
    }
    drop(emit);

    let _ = out.flush();
}

fn write_word(
    handle: &KenchiHandle,
    word: &str,
    json: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let candidates = handle.back_transliterate(word);
    if json {
        let line = serde_json::json!({ "input": word, "candidates": candidates });
        return writeln!(out, "{line}");
    }
    if candidates.is_empty() {
        return writeln!(out, "{word}: (no reading)");
    }
    writeln!(out, "{word}:")?;
    for candidate in &candidates {
        writeln!(out, "  {}\t{}", candidate.reading, candidate.score)?;
    }
    Ok(())
}
