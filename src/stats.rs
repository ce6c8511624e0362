//! Measurement histogram statistics
//!
//! Summarizes the outcome counts of a batch of Grover search shots: how much
//! of the batch landed on recorded outcomes, how peaked the distribution is,
//! and its Shannon entropy.

use crate::encoding::StateCodebook;
use crate::error::{GroverError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Outcome label (binary state string) -> observed count
pub type MeasurementHistogram = HashMap<String, u64>;

/// Aggregate metrics for one measurement histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    /// Sum of all recorded counts over `total_shots`
    ///
    /// Every recorded outcome counts as a success here, whether or not it
    /// decodes to an expected match. This is the fraction of shots that
    /// produced any recorded outcome. For the fraction that landed on an
    /// actual match, use [`decoded_success_probability`].
    pub success_probability: f64,
    /// Largest single count over `total_shots`
    pub max_amplitude: f64,
    /// Shannon entropy of the outcome distribution, in bits
    pub entropy: f64,
    /// Number of distinct outcome labels
    pub num_unique_states: f64,
}

impl StatisticsReport {
    /// Metric name -> value, in a stable order
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("success_probability", self.success_probability),
            ("max_amplitude", self.max_amplitude),
            ("entropy", self.entropy),
            ("num_unique_states", self.num_unique_states),
        ])
    }
}

/// Compute [`StatisticsReport`] for a histogram
///
/// `total_shots` is authoritative: it may exceed the sum of the counts when
/// some shots produced no recorded outcome, and it is never recomputed from
/// the map. `expected_matches` does not influence the report (see
/// [`StatisticsReport::success_probability`]).
///
/// # Errors
/// [`GroverError::InvalidArgument`] when `total_shots` is zero or the counts
/// add up past `u64::MAX`.
///
/// # Example
/// ```
/// use motif_grover::stats::{analyze_measurement_statistics, MeasurementHistogram};
///
/// let counts = MeasurementHistogram::from([("000".to_string(), 40), ("111".to_string(), 60)]);
/// let report = analyze_measurement_statistics(&counts, &[], 100).unwrap();
/// assert_eq!(report.max_amplitude, 0.6);
/// assert!((report.entropy - 0.971).abs() < 1e-3);
/// ```
pub fn analyze_measurement_statistics(
    counts: &MeasurementHistogram,
    _expected_matches: &[usize],
    total_shots: u64,
) -> Result<StatisticsReport> {
    require_shots(total_shots)?;

    let shots = total_shots as f64;
    let recorded = checked_total(counts.values().copied())?;
    let max_count = counts.values().copied().max().unwrap_or(0);

    Ok(StatisticsReport {
        success_probability: recorded as f64 / shots,
        max_amplitude: max_count as f64 / shots,
        entropy: shannon_entropy(counts, total_shots)?,
        num_unique_states: counts.len() as f64,
    })
}

/// Shannon entropy in bits over outcomes with a non-zero count
///
/// `p_i = count_i / total_shots`.
pub fn shannon_entropy(counts: &MeasurementHistogram, total_shots: u64) -> Result<f64> {
    require_shots(total_shots)?;

    let shots = total_shots as f64;
    let entropy: f64 = counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / shots;
            -p * p.log2()
        })
        .sum();
    Ok(entropy)
}

/// Fraction of shots whose outcome decodes to one of `expected_matches`
///
/// Labels that do not decode to a candidate position in `codebook` never
/// count as a success.
pub fn decoded_success_probability(
    counts: &MeasurementHistogram,
    expected_matches: &[usize],
    codebook: &StateCodebook,
    total_shots: u64,
) -> Result<f64> {
    require_shots(total_shots)?;

    let expected: HashSet<usize> = expected_matches.iter().copied().collect();
    let match_shots = checked_total(
        counts
            .iter()
            .filter(|(label, _)| {
                codebook
                    .position(label)
                    .is_some_and(|pos| expected.contains(&pos))
            })
            .map(|(_, &count)| count),
    )?;

    Ok(match_shots as f64 / total_shots as f64)
}

/// Aggregate raw simulator counts onto `n_qubits`-wide labels
///
/// Spaces (register separators) are removed, short labels are left-padded
/// with zeros, and long labels keep their first `n_qubits` characters.
/// Counts of labels that collapse to the same key are summed, saturating at
/// `u64::MAX`.
pub fn normalize_counts(raw: &MeasurementHistogram, n_qubits: u32) -> MeasurementHistogram {
    let width = n_qubits as usize;
    let mut aggregated = MeasurementHistogram::new();

    for (label, &count) in raw {
        let clean: String = label.chars().filter(|&c| c != ' ').collect();
        let len = clean.chars().count();
        let key = if len <= width {
            format!("{}{}", "0".repeat(width - len), clean)
        } else {
            clean.chars().take(width).collect()
        };
        let total = aggregated.entry(key).or_insert(0);
        *total = total.saturating_add(count);
    }

    aggregated
}

/// Most frequent outcomes, highest count first
///
/// Ties are broken by label so the ordering is deterministic.
pub fn top_states(counts: &MeasurementHistogram, k: usize) -> Vec<(String, u64)> {
    let mut states: Vec<_> = counts
        .iter()
        .map(|(label, count)| (label.clone(), *count))
        .collect();

    states.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    states.into_iter().take(k).collect()
}

fn require_shots(total_shots: u64) -> Result<()> {
    if total_shots == 0 {
        return Err(GroverError::InvalidArgument(
            "total_shots must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn checked_total(mut counts: impl Iterator<Item = u64>) -> Result<u64> {
    counts
        .try_fold(0u64, |acc, count| acc.checked_add(count))
        .ok_or_else(|| {
            GroverError::InvalidArgument("measurement counts overflow u64".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram(entries: &[(&str, u64)]) -> MeasurementHistogram {
        entries
            .iter()
            .map(|(label, count)| (label.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_two_outcome_scenario() {
        let counts = histogram(&[("000", 40), ("111", 60)]);
        let report = analyze_measurement_statistics(&counts, &[0, 7], 100).unwrap();

        assert!((report.max_amplitude - 0.6).abs() < 1e-12);
        assert_eq!(report.num_unique_states, 2.0);
        assert!((report.entropy - 0.970_950_594).abs() < 1e-6);
        assert!((report.success_probability - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_histogram() {
        let report = analyze_measurement_statistics(&MeasurementHistogram::new(), &[], 1000).unwrap();
        assert_eq!(report.success_probability, 0.0);
        assert_eq!(report.max_amplitude, 0.0);
        assert_eq!(report.entropy, 0.0);
        assert_eq!(report.num_unique_states, 0.0);
    }

    #[test]
    fn test_zero_shots_is_invalid() {
        let counts = histogram(&[("0", 1)]);
        let err = analyze_measurement_statistics(&counts, &[], 0).unwrap_err();
        assert!(matches!(err, GroverError::InvalidArgument(_)));
        assert!(shannon_entropy(&counts, 0).is_err());
    }

    #[test]
    fn test_total_shots_is_authoritative() {
        // 200 shots, only 100 recorded
        let counts = histogram(&[("00", 50), ("01", 50)]);
        let report = analyze_measurement_statistics(&counts, &[], 200).unwrap();
        assert!((report.success_probability - 0.5).abs() < 1e-12);
        assert!((report.max_amplitude - 0.25).abs() < 1e-12);
        assert!((report.entropy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_counts_skip_entropy_but_count_as_states() {
        let counts = histogram(&[("00", 100), ("01", 0)]);
        let report = analyze_measurement_statistics(&counts, &[], 100).unwrap();
        assert_eq!(report.entropy, 0.0);
        assert_eq!(report.num_unique_states, 2.0);
    }

    #[test]
    fn test_uniform_entropy_is_log2_k() {
        let counts = histogram(&[("00", 25), ("01", 25), ("10", 25), ("11", 25)]);
        let entropy = shannon_entropy(&counts, 100).unwrap();
        assert!((entropy - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_report_to_map() {
        let counts = histogram(&[("1", 3)]);
        let map = analyze_measurement_statistics(&counts, &[], 4)
            .unwrap()
            .to_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map["max_amplitude"], 0.75);
        assert_eq!(map["num_unique_states"], 1.0);
    }

    #[test]
    fn test_decoded_success_probability() {
        let codebook = StateCodebook::new(6); // 3 qubits
        let counts = histogram(&[("001", 30), ("100", 20), ("111", 40), ("01", 10)]);
        let p = decoded_success_probability(&counts, &[1, 4], &codebook, 100).unwrap();
        assert!((p - 0.5).abs() < 1e-12);

        // 111 decodes to 7, which is not a candidate
        let p = decoded_success_probability(&counts, &[7], &codebook, 100).unwrap();
        assert_eq!(p, 0.0);

        assert!(decoded_success_probability(&counts, &[1], &codebook, 0).is_err());
    }

    #[test]
    fn test_normalize_counts() {
        let raw = histogram(&[("1", 5), ("001", 7), ("0 01", 1), ("10110", 4), ("101", 2)]);
        let normalized = normalize_counts(&raw, 3);
        assert_eq!(normalized["001"], 13);
        assert_eq!(normalized["101"], 6);
        assert_eq!(normalized.len(), 2);
    }

    #[test]
    fn test_top_states() {
        let counts = histogram(&[("00", 5), ("01", 9), ("10", 5), ("11", 1)]);
        let top = top_states(&counts, 3);
        assert_eq!(
            top,
            vec![
                ("01".to_string(), 9),
                ("00".to_string(), 5),
                ("10".to_string(), 5)
            ]
        );
    }

    #[test]
    fn test_overflowing_counts_are_rejected() {
        let counts = histogram(&[("00", u64::MAX), ("01", 1)]);
        let err = analyze_measurement_statistics(&counts, &[], 100).unwrap_err();
        assert!(matches!(err, GroverError::InvalidArgument(_)));

        let codebook = StateCodebook::new(4);
        assert!(decoded_success_probability(&counts, &[0, 1], &codebook, 100).is_err());
        // only the "00" count decodes to an expected match
        assert!(decoded_success_probability(&counts, &[0], &codebook, 100).is_ok());
    }

    #[test]
    fn test_normalize_counts_saturates() {
        let raw = histogram(&[("1", u64::MAX), ("01", 7)]);
        let normalized = normalize_counts(&raw, 2);
        assert_eq!(normalized["01"], u64::MAX);
    }
}
