//! Prints one line per benchmark case:
//!
//! `key bis_root bis_iters sec_root sec_iters newton_root newton_iters`
//!
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use rootbench::benchmark::{self, DriverCfg};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cases   = benchmark::catalog();
    let records = benchmark::run(&cases, &DriverCfg::default());

    let mut out = BufWriter::new(io::stdout().lock());
    for record in &records {
        writeln!(out, "{record}")?;
    }
    out.flush()?;

    Ok(())
}
