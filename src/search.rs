//! Motif search planning
//!
//! Ties the core together for one sequence/motif pair: size the register,
//! locate the matches, build the oracle and pick the iteration count. The
//! resulting [`SearchPlan`] is what a circuit simulator needs to run the
//! search; measurement counts from that run come back through
//! [`SearchPlan::analyze_counts`].

use crate::config::SearchConfig;
use crate::dna;
use crate::encoding::StateCodebook;
use crate::error::{GroverError, Result};
use crate::iterations::{calculate_optimal_iterations, success_probability_after};
use crate::matcher::{find_pattern_matches, find_pattern_matches_parallel, MatchSet};
use crate::oracle::{build_oracle_diagonal, OracleDiagonal};
use crate::stats::{
    analyze_measurement_statistics, decoded_success_probability, normalize_counts, top_states,
    MeasurementHistogram, StatisticsReport,
};
use serde::Serialize;
use std::time::Instant;

/// A motif search over one sequence
#[derive(Debug)]
pub struct MotifSearch<'a> {
    sequence: &'a [u8],
    motif: &'a [u8],
    config: SearchConfig,
    codebook: StateCodebook,
}

/// Everything needed to run and interpret one Grover motif search
#[derive(Debug, Clone, Serialize)]
pub struct SearchPlan {
    pub sequence_len: usize,
    pub motif: String,
    /// Start offsets a motif of this length can occupy
    pub num_candidates: usize,
    pub n_qubits: u32,
    /// `2^n_qubits`, the oracle length
    pub database_size: usize,
    pub matches: MatchSet,
    /// Whether the parallel matcher was used
    pub parallel: bool,
    pub num_threads: usize,
    pub optimal_iterations: i64,
    /// `M / N`, the chance of sampling a match from the uniform superposition
    pub expected_success_probability: f64,
    /// Success probability after `optimal_iterations` steps
    pub theoretical_success_probability: f64,
    pub gc_content: f64,
    pub search_time_us: u64,
    #[serde(skip)]
    pub oracle: OracleDiagonal,
    #[serde(skip)]
    pub codebook: StateCodebook,
}

/// Interpretation of simulator counts against a plan
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementAnalysis {
    pub total_shots: u64,
    pub statistics: StatisticsReport,
    /// Fraction of shots that decoded to an actual match position
    pub match_probability: f64,
    pub top_states: Vec<RankedState>,
}

/// One measured state with its decoded position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedState {
    pub state: String,
    pub count: u64,
    /// `None` when the state addresses no candidate
    pub position: Option<usize>,
    pub is_match: bool,
}

impl<'a> MotifSearch<'a> {
    /// Set up a search; non-ACGT bases only produce a warning
    pub fn new(sequence: &'a [u8], motif: &'a [u8], config: SearchConfig) -> Result<Self> {
        config.validate()?;

        if config.validate_bases {
            for (what, bases) in [("sequence", sequence), ("motif", motif)] {
                if let Some((position, base)) = dna::find_invalid_base(bases) {
                    tracing::warn!(
                        position,
                        base = %base,
                        "{} contains invalid DNA bases (not A, T, G, C)",
                        what
                    );
                }
            }
        }

        let num_candidates = (sequence.len() + 1).saturating_sub(motif.len());
        let codebook = StateCodebook::new(num_candidates);

        Ok(Self {
            sequence,
            motif,
            config,
            codebook,
        })
    }

    pub fn num_candidates(&self) -> usize {
        self.codebook.num_candidates()
    }

    pub fn n_qubits(&self) -> u32 {
        self.codebook.n_qubits()
    }

    /// Oracle length, `2^n_qubits`
    pub fn database_size(&self) -> Result<usize> {
        1usize.checked_shl(self.n_qubits()).ok_or_else(|| {
            GroverError::InvalidArgument(format!(
                "database of 2^{} states does not fit in memory",
                self.n_qubits()
            ))
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Locate every motif occurrence, going parallel above the configured threshold
    pub fn find_matches(&self) -> Result<MatchSet> {
        if self.config.use_parallel(self.sequence.len()) {
            find_pattern_matches_parallel(self.sequence, self.motif, self.config.num_threads)
        } else {
            Ok(find_pattern_matches(self.sequence, self.motif))
        }
    }

    /// Run the classical half of the search and assemble the plan
    pub fn plan(&self) -> Result<SearchPlan> {
        let database_size = self.database_size()?;
        let parallel = self.config.use_parallel(self.sequence.len());

        let start = Instant::now();
        let matches = self.find_matches()?;
        let search_time_us = start.elapsed().as_micros() as u64;
        tracing::debug!(
            matches = matches.len(),
            parallel,
            search_time_us,
            "motif scan finished"
        );

        let oracle = build_oracle_diagonal(&matches, database_size);

        let total = self.num_candidates().max(1) as i64;
        let marked = matches.len().max(1) as i64;
        let optimal_iterations = calculate_optimal_iterations(total, marked);

        Ok(SearchPlan {
            sequence_len: self.sequence.len(),
            motif: String::from_utf8_lossy(self.motif).into_owned(),
            num_candidates: self.num_candidates(),
            n_qubits: self.n_qubits(),
            database_size,
            parallel,
            num_threads: if parallel { self.config.num_threads } else { 1 },
            optimal_iterations,
            expected_success_probability: marked as f64 / total as f64,
            theoretical_success_probability: success_probability_after(
                total,
                marked,
                optimal_iterations,
            ),
            gc_content: dna::calculate_gc_content(self.sequence),
            search_time_us,
            matches,
            oracle,
            codebook: self.codebook.clone(),
        })
    }
}

impl SearchPlan {
    /// Whether a candidate position is a match
    pub fn is_match(&self, position: usize) -> bool {
        self.matches.binary_search(&position).is_ok()
    }

    /// Summarize raw simulator counts for this plan
    ///
    /// Labels are first normalized to `n_qubits` bits (see
    /// [`normalize_counts`]). `top` bounds the number of ranked states kept.
    pub fn analyze_counts(
        &self,
        raw_counts: &MeasurementHistogram,
        total_shots: u64,
        top: usize,
    ) -> Result<MeasurementAnalysis> {
        let counts = normalize_counts(raw_counts, self.n_qubits);
        let statistics = analyze_measurement_statistics(&counts, &self.matches, total_shots)?;
        let match_probability =
            decoded_success_probability(&counts, &self.matches, &self.codebook, total_shots)?;

        let top_states = top_states(&counts, top)
            .into_iter()
            .map(|(state, count)| {
                let position = self.codebook.position(&state);
                RankedState {
                    is_match: position.is_some_and(|pos| self.is_match(pos)),
                    state,
                    count,
                    position,
                }
            })
            .collect();

        Ok(MeasurementAnalysis {
            total_shots,
            statistics,
            match_probability,
            top_states,
        })
    }
}
