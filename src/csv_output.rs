//! CSV output format for match positions and measured states
//!
//! `--format csv` for spreadsheet analysis and machine parsing

use crate::search::{MeasurementAnalysis, SearchPlan};

/// CSV record for a single match
#[derive(Debug, Clone, PartialEq)]
pub struct CsvMatch {
    pub position: usize,
    /// Register state encoding the position
    pub state: String,
}

/// CSV output formatter for match positions
#[derive(Debug, Default)]
pub struct CsvOutput {
    matches: Vec<CsvMatch>,
}

impl CsvOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// One row per match in `plan`
    pub fn from_plan(plan: &SearchPlan) -> Self {
        let matches = plan
            .matches
            .iter()
            .map(|&position| CsvMatch {
                position,
                state: plan.codebook.state(position).unwrap_or_default().to_string(),
            })
            .collect();
        Self { matches }
    }

    pub fn add_match(&mut self, record: CsvMatch) {
        self.matches.push(record);
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::from("position,state\n");

        for record in &self.matches {
            output.push_str(&record.position.to_string());
            output.push(',');
            output.push_str(&escape_field(&record.state));
            output.push('\n');
        }

        output
    }
}

/// CSV output for measured states (with --counts)
#[derive(Debug, Default)]
pub struct CsvStatesOutput {
    rows: Vec<CsvState>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CsvState {
    pub state: String,
    pub position: Option<usize>,
    pub count: u64,
    pub probability: f64,
    pub is_match: bool,
}

impl CsvStatesOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_analysis(analysis: &MeasurementAnalysis) -> Self {
        let rows = analysis
            .top_states
            .iter()
            .map(|ranked| CsvState {
                state: ranked.state.clone(),
                position: ranked.position,
                count: ranked.count,
                probability: ranked.count as f64 / analysis.total_shots as f64,
                is_match: ranked.is_match,
            })
            .collect();
        Self { rows }
    }

    pub fn add_state(&mut self, row: CsvState) {
        self.rows.push(row);
    }

    /// Generate CSV output; states that address no candidate leave `position` empty
    pub fn to_csv(&self) -> String {
        let mut output = String::from("state,position,count,probability,match\n");

        for row in &self.rows {
            let position = row.position.map(|p| p.to_string()).unwrap_or_default();
            output.push_str(&format!(
                "{},{},{},{:.4},{}\n",
                escape_field(&row.state),
                position,
                row.count,
                row.probability,
                row.is_match
            ));
        }

        output
    }
}

/// Quote a field containing a comma, quote or newline, doubling inner quotes
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
