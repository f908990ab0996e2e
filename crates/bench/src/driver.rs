//! Orchestration of the full comparison run.

use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::candidate::Registry;
use crate::clock::Clock;
use crate::{correctness, generator, runner};

/// Batch sizes every candidate is measured against, in ascending order.
pub const BATCH_SIZES: [usize; 3] = [10, 100, 1000];

/// Runs the whole comparison: one correctness pass over every candidate in
/// registration order, then one timed pass per batch size.
///
/// Each size class generates a single input batch which all candidates
/// share, so that candidates within a class are timed against identical
/// workloads. Any candidate failure aborts the run immediately; later
/// candidates and size classes are not reached.
pub fn run<W: Write>(registry: &Registry, clock: &dyn Clock, out: &mut W) -> Result<()> {
    info!(candidates = registry.len(), "Starting correctness pass");
    for candidate in registry.candidates() {
        correctness::check_outputs(candidate, out)?;
    }

    for size in BATCH_SIZES {
        let inputs = generator::generate_batch(size);
        info!(size, "Starting timed pass");

        writeln!(out, "--> {} invocations <--", size)?;
        for candidate in registry.candidates() {
            runner::do_benchmark(candidate, &inputs, clock, out)?;
        }
    }

    Ok(())
}
