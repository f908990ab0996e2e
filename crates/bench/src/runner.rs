//! Timed execution of one candidate over one input batch.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::candidate::{Candidate, NAME_WIDTH};
use crate::clock::Clock;
use crate::generator::InputBatch;

/// Invokes the candidate once per input pair, in order, and prints the
/// total elapsed wall-clock time for the batch.
///
/// Digests are discarded; only time matters here. A single pass is the
/// entire measurement: no warm-up, no repetition, no aggregation. An error
/// from the candidate propagates before any report line is written.
pub fn do_benchmark<W: Write>(
    candidate: &Candidate,
    inputs: &InputBatch,
    clock: &dyn Clock,
    out: &mut W,
) -> Result<u64> {
    let start = clock.millis();
    for (a, b) in inputs {
        candidate
            .invoke(a, b)
            .with_context(|| format!("Benchmarking candidate '{}'", candidate.name()))?;
    }
    let elapsed = clock.millis() - start;

    debug!(
        candidate = candidate.name(),
        invocations = inputs.len(),
        elapsed_ms = elapsed,
        "timed batch"
    );

    writeln!(
        out,
        "{:<width$} {} hash -> elapsed time: {}ms",
        candidate.name(),
        candidate.family(),
        elapsed,
        width = NAME_WIDTH,
    )?;
    Ok(elapsed)
}
