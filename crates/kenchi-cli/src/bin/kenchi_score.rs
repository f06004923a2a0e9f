// kenchi-score: Score how likely each name is to be a Japanese surname.
//
// The score is the lexicon weight of the best katakana reading, or 0 when
// the name has none. Names come from the command line, or from stdin (one
// per line) when none are given.
//
// Usage:
//   kenchi-score [-l LEXICON] [NAME...]

use std::io::{self, Write};

use clap::Parser;
use kenchi_cli::CommonArgs;

#[derive(Parser)]
#[command(name = "kenchi-score", about = "Score names by surname likelihood")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    /// Names to score (read from stdin when omitted)
    names: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    kenchi_cli::init_tracing();

    let handle = kenchi_cli::load_handle(cli.common.lexicon.as_deref())
        .unwrap_or_else(|e| kenchi_cli::fatal(&e));

    let names: Box<dyn Iterator<Item = String>> = if cli.names.is_empty() {
        Box::new(kenchi_cli::stdin_lines())
    } else {
        Box::new(cli.names.into_iter())
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for name in names {
        let score = handle.score_as_surname(&name);
        if let Err(e) = writeln!(out, "{name}\t{score}") {
            kenchi_cli::fatal(&format!("failed to write output: {e}"));
        }
    }
    let _ = out.flush();
}
