//! DNA sequence utilities: validation, composition and test data
//!
//! The matcher itself is alphabet-agnostic; these helpers are for callers
//! working with plain `A`/`T`/`G`/`C` sequences.

use crate::error::{GroverError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// The four canonical bases
pub const DNA_BASES: [u8; 4] = [b'A', b'T', b'G', b'C'];

/// Seed used when a caller does not supply one
pub const DEFAULT_SEED: u64 = 42;

/// Whether every byte is one of `A`, `T`, `G`, `C` (uppercase only)
///
/// An empty sequence is valid.
pub fn is_valid_dna(sequence: &[u8]) -> bool {
    sequence.iter().all(|b| DNA_BASES.contains(b))
}

/// First invalid base and its offset, if any
pub fn find_invalid_base(sequence: &[u8]) -> Option<(usize, char)> {
    sequence
        .iter()
        .position(|b| !DNA_BASES.contains(b))
        .map(|pos| (pos, sequence[pos] as char))
}

/// Fraction of `G` and `C` bases; 0 for an empty sequence
pub fn calculate_gc_content(sequence: &[u8]) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence
        .iter()
        .filter(|&&b| b == b'G' || b == b'C')
        .count();
    gc as f64 / sequence.len() as f64
}

/// Pseudo-random DNA sequence of `length` bases, deterministic in `seed`
///
/// Each call builds its own generator, so concurrent callers never share
/// random state.
///
/// # Example
/// ```
/// use motif_grover::dna::{generate_random_dna, is_valid_dna};
///
/// let a = generate_random_dna(64, 7);
/// assert_eq!(a.len(), 64);
/// assert!(is_valid_dna(a.as_bytes()));
/// assert_eq!(a, generate_random_dna(64, 7));
/// ```
pub fn generate_random_dna(length: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..length)
        .map(|_| DNA_BASES[rng.gen_range(0..DNA_BASES.len())] as char)
        .collect()
}

/// Strip whitespace and uppercase raw sequence text, then validate it
pub fn parse_sequence(raw: &str) -> Result<String> {
    let sequence: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    // Non-ASCII characters are never valid bases
    if let Some((position, base)) = sequence
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii() || !DNA_BASES.contains(&(*c as u8)))
    {
        return Err(GroverError::InvalidSequence { position, base });
    }

    Ok(sequence)
}

/// Read a sequence from a text file (whitespace and newlines are ignored)
pub fn read_sequence_file(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path)?;
    let sequence = parse_sequence(&raw)?;
    tracing::debug!(path = %path.display(), bases = sequence.len(), "read sequence file");
    Ok(sequence)
}
