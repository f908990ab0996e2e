//! Fixed-input correctness pass.

use std::io::Write;

use anyhow::{Context, Result};

use crate::candidate::{Candidate, Numeral, NAME_WIDTH};

/// The canonical input pair every candidate is checked against.
const CHECK_PAIR: (&str, &str) = ("17", "71");

/// Invokes the candidate on the canonical pair and prints its digest.
///
/// Same-family outputs are cross-checked by the operator reading the
/// report; nothing here asserts that candidates agree. A failing
/// invocation propagates and aborts the whole run.
pub fn check_outputs<W: Write>(candidate: &Candidate, out: &mut W) -> Result<()> {
    let a = Numeral::new(CHECK_PAIR.0);
    let b = Numeral::new(CHECK_PAIR.1);

    let digest = candidate
        .invoke(&a, &b)
        .with_context(|| format!("Checking candidate '{}'", candidate.name()))?;

    writeln!(
        out,
        "{:<width$} {} hash({}, {}): \"{}\"",
        candidate.name(),
        candidate.family(),
        CHECK_PAIR.0,
        CHECK_PAIR.1,
        digest,
        width = NAME_WIDTH,
    )?;
    Ok(())
}
