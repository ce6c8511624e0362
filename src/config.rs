//! Search configuration
//!
//! Values come from defaults, an optional TOML file, and finally CLI flags.

use crate::error::{GroverError, Result};
use crate::matcher::DEFAULT_NUM_THREADS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a motif search
///
/// # Example
/// ```
/// use motif_grover::config::SearchConfig;
///
/// let config: SearchConfig = toml::from_str("num_threads = 8").unwrap();
/// assert_eq!(config.num_threads, 8);
/// assert_eq!(config.parallel_threshold, 100_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Worker threads for the parallel matcher
    ///
    /// Default: 4
    pub num_threads: usize,

    /// Sequences longer than this many bases use the parallel matcher
    ///
    /// Below it, thread startup costs more than the scan itself.
    /// Default: 100 000
    pub parallel_threshold: usize,

    /// Shots per simulator run, used when reporting on measurement counts
    ///
    /// Default: 1000
    pub shots: u64,

    /// Warn when the sequence or motif contains bases other than A/T/G/C
    ///
    /// Default: true
    pub validate_bases: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            num_threads: DEFAULT_NUM_THREADS,
            parallel_threshold: 100_000,
            shots: 1000,
            validate_bases: true,
        }
    }
}

impl SearchConfig {
    /// Always scan on the calling thread
    pub fn single_threaded() -> Self {
        Self {
            num_threads: 1,
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// One worker per available core, parallel from modest sequence sizes
    pub fn throughput() -> Self {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(DEFAULT_NUM_THREADS);
        Self {
            num_threads: cores,
            parallel_threshold: 10_000,
            ..Self::default()
        }
    }

    /// Load a configuration from a TOML file; missing keys take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| GroverError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == 0 {
            return Err(GroverError::Config(
                "num_threads must be >= 1, got 0".to_string(),
            ));
        }

        if self.shots == 0 {
            return Err(GroverError::Config("shots must be >= 1, got 0".to_string()));
        }

        Ok(())
    }

    /// Whether a sequence of `len` bases should take the parallel path
    pub fn use_parallel(&self, len: usize) -> bool {
        self.num_threads > 1 && len > self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.num_threads, 4);
        assert_eq!(config.parallel_threshold, 100_000);
        assert_eq!(config.shots, 1000);
        assert!(config.validate_bases);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_single_threaded_config() {
        let config = SearchConfig::single_threaded();
        assert!(!config.use_parallel(10_000_000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_throughput_config() {
        let config = SearchConfig::throughput();
        assert!(config.num_threads >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_use_parallel_threshold() {
        let config = SearchConfig::default();
        assert!(!config.use_parallel(100_000));
        assert!(config.use_parallel(100_001));
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_num_threads() {
        let mut config = SearchConfig::default();
        config.num_threads = 0;
        assert!(matches!(config.validate(), Err(GroverError::Config(_))));
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_shots() {
        let mut config = SearchConfig::default();
        config.shots = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "num_threads = 2\nshots = 4096").unwrap();
        let config = SearchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.num_threads, 2);
        assert_eq!(config.shots, 4096);
        assert_eq!(config.parallel_threshold, 100_000);
    }

    #[test]
    fn test_from_file_rejects_unknown_keys() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "threads = 2").unwrap();
        assert!(matches!(
            SearchConfig::from_file(file.path()),
            Err(GroverError::Config(_))
        ));
    }

    #[test]
    fn test_from_file_validates() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "num_threads = 0").unwrap();
        assert!(SearchConfig::from_file(file.path()).is_err());
    }
}
