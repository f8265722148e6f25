//! Generate → parse → evaluate round-trip driver
//!
//! Drives the whole pipeline from a single seed and reduces each run to one
//! checksum integer. Because every stage is deterministic, the checksum for
//! a given `(seed, rounds, size)` triple is stable forever and doubles as a
//! golden regression value.

use crate::eval::eval;
use crate::gen::{ExprGen, Lehmer};
use crate::parser::Parser;
use log::{debug, trace};

/// Outcome of one round-trip run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTrip {
    /// Wrapping sum of generated sizes and evaluation results, with a fixed
    /// penalty of 1 for every failed parse.
    pub checksum: i64,
    /// Parse attempts that produced a tree.
    pub parses: usize,
    /// Parse attempts that failed (expected for heavily truncated input).
    pub failures: usize,
}

/// Truncation step applied to each generated buffer: every round parses the
/// full buffer plus three progressively shorter prefixes.
const TRUNCATION_STEP: usize = 100;
const PARSES_PER_ROUND: usize = 4;

/// Run `rounds` generate/parse/evaluate cycles from one seeded PRNG.
///
/// Each round generates a buffer with budget `size`, adds its length to the
/// checksum, then parses the buffer at four truncation lengths
/// (`len - i*100`, floored at zero) to probe partial-input robustness.
/// A successful parse contributes its evaluated value; a failed parse
/// contributes 1.
pub fn generate_and_round_trip(seed: i32, rounds: u32, size: usize) -> RoundTrip {
    let mut rng = Lehmer::new(seed);
    let mut checksum: i64 = 0;
    let mut parses = 0usize;
    let mut failures = 0usize;

    for round in 0..rounds {
        let buf = ExprGen::generate(size, &mut rng);
        checksum = checksum.wrapping_add(buf.len() as i64);

        for i in 0..PARSES_PER_ROUND {
            let len = buf.len().saturating_sub(i * TRUNCATION_STEP);
            match Parser::new(&buf[..len]).and_then(|mut p| p.parse()) {
                Ok(node) => {
                    parses += 1;
                    checksum = checksum.wrapping_add(eval(&node));
                }
                Err(err) => {
                    failures += 1;
                    checksum = checksum.wrapping_add(1);
                    trace!("round {round}: parse failed at length {len}: {err}");
                }
            }
        }
    }

    debug!(
        "seed {seed}: {rounds} rounds, {parses} parses, {failures} failures, checksum {checksum}"
    );

    RoundTrip {
        checksum,
        parses,
        failures,
    }
}
