// kenchi-order: Put two-token Japanese names in given-name-first order.
//
// With two NAME arguments, orders that pair. Otherwise reads stdin, one
// whitespace-separated pair per line; malformed lines are reported and
// skipped.
//
// Usage:
//   kenchi-order [-l LEXICON] [--prior P] [FIRST SECOND]

use std::io::{self, Write};

use clap::Parser;
use kenchi_cli::CommonArgs;
use kenchi_ja::{DEFAULT_PRIOR, KenchiError, KenchiHandle};

#[derive(Parser)]
#[command(
    name = "kenchi-order",
    about = "Estimate the given-name/family-name order of two-token names"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    /// Probability that input pairs are already given name first
    #[arg(short, long, default_value_t = DEFAULT_PRIOR)]
    prior: f64,
    /// The two name tokens (read pairs from stdin when omitted)
    #[arg(num_args = 0..=2)]
    names: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    kenchi_cli::init_tracing();

    let handle = kenchi_cli::load_handle(cli.common.lexicon.as_deref())
        .unwrap_or_else(|e| kenchi_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !cli.names.is_empty() {
        let ordered = order(&handle, &cli.names, cli.prior)
            .unwrap_or_else(|e| kenchi_cli::fatal(&e.to_string()));
        let _ = writeln!(out, "{ordered}");
        let _ = out.flush();
        return;
    }

    for line in kenchi_cli::stdin_lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match order(&handle, &tokens, cli.prior) {
            Ok(ordered) => {
                let _ = writeln!(out, "{ordered}");
            }
            Err(e @ KenchiError::InvalidPrior(_)) => kenchi_cli::fatal(&e.to_string()),
            Err(e) => eprintln!("{line}: {e}"),
        }
    }
    let _ = out.flush();
}

fn order<S: AsRef<str>>(
    handle: &KenchiHandle,
    names: &[S],
    prior: f64,
) -> Result<String, KenchiError> {
    Ok(handle.order_names(names, prior)?.join(" "))
}
