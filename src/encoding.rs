//! Position encoding for Grover search registers
//!
//! Candidate positions in a sequence are mapped onto computational basis
//! states of an `n_qubits` register. A state is written as a fixed-width
//! binary string, most-significant bit first, the same layout simulators use
//! for measurement labels.

use crate::error::{GroverError, Result};

/// Encode `0..num_candidates` as `n_qubits`-wide binary strings
///
/// Each string is left-zero-padded and most-significant bit first. When
/// `n_qubits` is too small for `num_candidates - 1`, only the low-order
/// `n_qubits` bits of each index are kept (no error). Use
/// [`encode_positions_checked`] to reject that case instead.
///
/// # Example
/// ```
/// use motif_grover::encoding::encode_positions;
///
/// let states = encode_positions(4, 3);
/// assert_eq!(states, vec!["000", "001", "010", "011"]);
/// ```
pub fn encode_positions(num_candidates: usize, n_qubits: u32) -> Vec<String> {
    (0..num_candidates)
        .map(|pos| encode_state(pos, n_qubits))
        .collect()
}

/// Like [`encode_positions`], but fails when the register cannot hold every index
pub fn encode_positions_checked(num_candidates: usize, n_qubits: u32) -> Result<Vec<String>> {
    if !fits_in_register(num_candidates, n_qubits) {
        return Err(GroverError::EncodingOverflow {
            num_candidates,
            n_qubits,
        });
    }
    Ok(encode_positions(num_candidates, n_qubits))
}

/// Encode a single position as an `n_qubits`-wide binary string
pub fn encode_state(pos: usize, n_qubits: u32) -> String {
    (0..n_qubits)
        .rev()
        .map(|bit| {
            // Bits past the word width are always zero
            if pos.checked_shr(bit).unwrap_or(0) & 1 == 1 {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

/// Whether every index in `0..num_candidates` is representable in `n_qubits` bits
pub fn fits_in_register(num_candidates: usize, n_qubits: u32) -> bool {
    match num_candidates.checked_sub(1) {
        None => true,
        Some(max_index) => max_index.checked_shr(n_qubits).unwrap_or(0) == 0,
    }
}

/// Number of qubits needed to address `num_candidates` positions
///
/// `ceil(log2(num_candidates))`, with a floor of one qubit so that empty and
/// single-candidate searches still get a register.
pub fn qubits_needed(num_candidates: usize) -> u32 {
    if num_candidates <= 1 {
        return 1;
    }
    usize::BITS - (num_candidates - 1).leading_zeros()
}

/// Parse a binary state label back into a position
///
/// Returns `None` for empty labels, labels containing anything other than
/// `'0'`/`'1'`, or values that overflow `usize`.
pub fn decode_state(label: &str) -> Option<usize> {
    if label.is_empty() || !label.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    usize::from_str_radix(label, 2).ok()
}

/// Bidirectional position <-> state mapping for one search
#[derive(Debug, Clone)]
pub struct StateCodebook {
    n_qubits: u32,
    states: Vec<String>,
}

impl StateCodebook {
    /// Build the codebook for `num_candidates` positions using the minimal register
    pub fn new(num_candidates: usize) -> Self {
        let n_qubits = qubits_needed(num_candidates);
        Self {
            n_qubits,
            states: encode_positions(num_candidates, n_qubits),
        }
    }

    pub fn n_qubits(&self) -> u32 {
        self.n_qubits
    }

    pub fn num_candidates(&self) -> usize {
        self.states.len()
    }

    /// State label for a candidate position
    pub fn state(&self, position: usize) -> Option<&str> {
        self.states.get(position).map(String::as_str)
    }

    /// Candidate position for a state label
    ///
    /// Only labels of exactly `n_qubits` bits that address an existing
    /// candidate decode; padding states beyond the last candidate do not.
    pub fn position(&self, label: &str) -> Option<usize> {
        if label.len() != self.n_qubits as usize {
            return None;
        }
        decode_state(label).filter(|&pos| pos < self.states.len())
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }
}
