// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Demo: build a set from the command line and print it.
//!
//! ```text
//! RUST_LOG=trace skipset 5 3 8 3 1
//! ```

use std::process::ExitCode;

use skipset::Config;
use skipset::DuplicatePolicy;
use skipset::OrderedSet;
use tracing::error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();

    let mut values = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.parse::<i64>() {
            Ok(value) => values.push(value),
            Err(err) => {
                error!(arg = %arg, %err, "not an integer");
                return ExitCode::FAILURE;
            }
        }
    }

    let config = Config::new().with_duplicates(DuplicatePolicy::Set);
    let mut set = match OrderedSet::with_config(config) {
        Ok(set) => set,
        Err(err) => {
            error!(%err, "bad configuration");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = set.try_extend(values) {
        error!(%err, "failed to build set");
        return ExitCode::FAILURE;
    }

    info!(len = set.len(), height = set.height(), "built set");
    println!("{}", set);
    return ExitCode::SUCCESS;
}
