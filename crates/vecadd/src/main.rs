//! `vecadd`: add a 1M-element vector of ones into a vector of twos and
//! report the maximum deviation from 3.0.
//!
//! Prints exactly one line to stdout: `Max error: <value>`. Diagnostics
//! go to stderr; set `RUST_LOG=debug` to see per-phase timings.

use tracing_subscriber::EnvFilter;
use vecadd::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let session = Session::new(RunConfig::default())?;
    let report = session.run()?;
    println!("Max error: {}", report.max_error());
    Ok(())
}
