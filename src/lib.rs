//! motif-grover - classical acceleration core for Grover DNA motif search
//!
//! This library locates motif occurrences in a sequence (serially or across
//! scoped worker threads), turns them into a phase-flip oracle diagonal,
//! sizes the Grover iteration count, and summarizes measurement histograms.
//! Circuit simulation itself happens elsewhere; everything here is plain
//! arithmetic over bytes and numbers.

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod dna;
pub mod encoding;
pub mod error;
pub mod iterations;
pub mod json_output;
pub mod matcher;
pub mod oracle;
pub mod search;
pub mod stats;

pub use encoding::encode_positions;
pub use error::{GroverError, Result};
pub use iterations::calculate_optimal_iterations;
pub use matcher::{find_pattern_matches, find_pattern_matches_parallel};
pub use oracle::build_oracle_diagonal;
pub use stats::analyze_measurement_statistics;
