//! Phase-flip oracle construction
//!
//! The oracle for a Grover search is diagonal in the computational basis: it
//! multiplies marked states by -1 and leaves the rest alone. Handing the
//! diagonal to a simulator as a plain vector avoids decomposing it into
//! multi-controlled gates.

use num_complex::Complex64;

/// One phase per database index, each `+1` or `-1`
pub type OracleDiagonal = Vec<Complex64>;

pub const UNMARKED: Complex64 = Complex64::new(1.0, 0.0);
pub const MARKED: Complex64 = Complex64::new(-1.0, 0.0);

/// Build the oracle diagonal for a database of `database_size` items
///
/// Every index starts at `+1`; each match position below `database_size` is
/// flipped to `-1`. Positions at or beyond `database_size` are ignored, and
/// duplicate positions mark their index once.
///
/// # Example
/// ```
/// use motif_grover::oracle::{build_oracle_diagonal, MARKED, UNMARKED};
///
/// let diag = build_oracle_diagonal(&[1, 3, 9], 4);
/// assert_eq!(diag, vec![UNMARKED, MARKED, UNMARKED, MARKED]);
/// ```
pub fn build_oracle_diagonal(matches: &[usize], database_size: usize) -> OracleDiagonal {
    let mut diagonal = vec![UNMARKED; database_size];

    let mut ignored = 0usize;
    for &pos in matches {
        match diagonal.get_mut(pos) {
            Some(phase) => *phase = MARKED,
            None => ignored += 1,
        }
    }

    if ignored > 0 {
        tracing::warn!(
            ignored,
            database_size,
            "match positions outside the oracle database were skipped"
        );
    }

    diagonal
}

/// Number of indices the oracle marks
pub fn count_marked(diagonal: &[Complex64]) -> usize {
    diagonal.iter().filter(|&&phase| phase == MARKED).count()
}
