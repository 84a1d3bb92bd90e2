//! Diagnostics for the runner.
//!
//! Answers are printed to stdout by `main`; everything emitted through
//! `tracing` goes to stderr and is filtered by `RUST_LOG` (default `warn`).
//!
//! ```bash
//! RUST_LOG=aoc2022=debug aoc2022 11 2
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
