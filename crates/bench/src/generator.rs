//! Pseudo-random input batches for the timed pass.

use rand::Rng;

use crate::candidate::Numeral;

/// An ordered sequence of input pairs, generated once per batch size and
/// shared read-only by every candidate measured against that size.
pub type InputBatch = Vec<(Numeral, Numeral)>;

/// Draws `size` pairs of uniform 32-bit numerals from the process-wide
/// random source.
///
/// Values are rendered in decimal so that each binding can re-encode them
/// as it needs. There is no seeding and no cross-run reproducibility.
pub fn generate_batch(size: usize) -> InputBatch {
    let mut rng = rand::thread_rng();
    (0..size)
        .map(|_| {
            (
                Numeral::from_u32(rng.gen()),
                Numeral::from_u32(rng.gen()),
            )
        })
        .collect()
}
