use bisearch_core::{RunOutcome, SearchStats};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub view: String,
    pub start: String,
    pub goal: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub step_ms: u64,
    pub animated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    pub cancelled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub visited_from_start: usize,
    pub visited_from_goal: usize,
    pub nodes_explored: usize,
    pub expansions: usize,
    pub steps: usize,
}

impl From<&SearchStats> for JsonStats {
    fn from(stats: &SearchStats) -> Self {
        Self {
            search_time_ms: stats.elapsed_ms,
            visited_from_start: stats.visited_from_start,
            visited_from_goal: stats.visited_from_goal,
            nodes_explored: stats.total_visited,
            expansions: stats.expansions,
            steps: stats.steps,
        }
    }
}

/// Builds the report for a finished run, naming nodes through `label`.
pub fn create_json_output<N>(
    outcome: &RunOutcome<N>,
    meeting_point: Option<&N>,
    query: JsonQuery,
    label: impl Fn(&N) -> String,
) -> JsonOutput {
    let path = outcome
        .path()
        .map(|path| path.nodes().iter().map(&label).collect::<Vec<_>>());

    JsonOutput {
        query,
        result: JsonResult {
            found: path.is_some(),
            cancelled: matches!(outcome, RunOutcome::Cancelled { .. }),
            meeting_point: meeting_point.map(&label),
            path,
        },
        stats: JsonStats::from(outcome.stats()),
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
