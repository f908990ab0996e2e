#![deny(rust_2018_idioms)]

use pedersen_bench::clock::WallClock;
use pedersen_bench::{bindings, driver};
use tracing::info;

fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }

    setup_tracing();

    let registry = bindings::default_registry();
    info!(candidates = registry.len(), "🏁 Starting hash comparison.");

    let clock = WallClock::new();
    let stdout = std::io::stdout();
    driver::run(&registry, &clock, &mut stdout.lock())?;

    info!("🛑 Comparison finished.");
    Ok(())
}

fn setup_tracing() {
    // Diagnostics go to stderr so they never interleave with the report.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}
