// kenchi-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use kenchi_ja::{KenchiError, KenchiHandle};

/// Lexicon artifact file name.
const LEXICON_JSON: &str = "lexicon.json";

/// Environment variable naming a lexicon file or a directory holding one.
const LEXICON_ENV: &str = "KENCHI_LEXICON_PATH";

/// Options shared by every tool.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Lexicon JSON file (defaults to the search path, then the bundled lexicon)
    #[arg(short, long, value_name = "PATH")]
    pub lexicon: Option<String>,
}

/// Search for a lexicon artifact and create a KenchiHandle.
///
/// Search order:
/// 1. `lexicon_path` argument (if provided; must exist)
/// 2. `KENCHI_LEXICON_PATH` environment variable (file, or directory
///    containing `lexicon.json`)
/// 3. `~/.kenchi/lexicon.json`
/// 4. `lexicon.json` in the current working directory
/// 5. The lexicon bundled with kenchi-ja
pub fn load_handle(lexicon_path: Option<&str>) -> Result<KenchiHandle, String> {
    if let Some(path) = lexicon_path {
        let path = Path::new(path);
        if !path.is_file() {
            return Err(format!("lexicon not found: {}", path.display()));
        }
        return from_file(path);
    }

    let search_paths = build_search_paths();
    if let Some(path) = search_paths.iter().find(|p| p.is_file()) {
        return from_file(path);
    }

    tracing::debug!(searched = search_paths.len(), "using bundled lexicon");
    KenchiHandle::with_bundled_lexicon()
        .map_err(|e: KenchiError| format!("failed to load bundled lexicon: {e}"))
}

fn from_file(path: &Path) -> Result<KenchiHandle, String> {
    tracing::debug!(path = %path.display(), "loading lexicon");
    KenchiHandle::from_path(path)
        .map_err(|e| format!("failed to load {}: {e}", path.display()))
}

/// Build the list of candidate lexicon files.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // KENCHI_LEXICON_PATH environment variable
    if let Ok(env_path) = std::env::var(LEXICON_ENV) {
        paths.push(PathBuf::from(&env_path));
        paths.push(PathBuf::from(&env_path).join(LEXICON_JSON));
    }

    // Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".kenchi").join(LEXICON_JSON));
    }

    // Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LEXICON_JSON));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Install a stderr fmt subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

/// Non-empty trimmed lines of stdin.
///
/// A read error is reported on stderr and ends the stream.
pub fn stdin_lines() -> impl Iterator<Item = String> {
    io::stdin()
        .lock()
        .lines()
        .map_while(|line| match line {
            Ok(l) => Some(l),
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                None
            }
        })
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
