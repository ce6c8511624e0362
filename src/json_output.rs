//! JSON output format for search plans
//!
//! `--format json` implementation

use crate::search::{MeasurementAnalysis, SearchPlan};
use serde::Serialize;

/// Root JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// The search plan
    pub plan: SearchPlan,
    /// Measurement analysis (if --counts given)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<MeasurementAnalysis>,
}

impl JsonOutput {
    pub fn new(plan: SearchPlan) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "motif-grover-json-v1".to_string(),
            plan,
            analysis: None,
        }
    }

    pub fn set_analysis(&mut self, analysis: MeasurementAnalysis) {
        self.analysis = Some(analysis);
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
