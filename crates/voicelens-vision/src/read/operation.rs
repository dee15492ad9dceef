//! Read operation wire types.
//!
//! Mirrors the `v3.2/read/analyzeResults` response shape, reduced to the
//! fields the pipeline consumes.

use serde::{Deserialize, Serialize};

/// Status of an asynchronous read operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationStatus {
    /// The operation was accepted but has not started.
    NotStarted,
    /// The operation is in progress.
    Running,
    /// The operation completed and results are available.
    Succeeded,
    /// The operation failed on the remote side.
    Failed,
}

impl OperationStatus {
    /// Whether the operation has reached a terminal state.
    ///
    /// Polling must continue only while the status is `notStarted` or
    /// `running`; anything else ends the loop.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::NotStarted | Self::Running)
    }
}

/// One polled snapshot of a read operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadOperation {
    /// Current operation status.
    pub status: OperationStatus,
    /// Recognition results, present once the operation succeeded.
    #[serde(default)]
    pub analyze_result: Option<AnalyzeResult>,
    /// Error payload reported by the service on failure.
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ReadOperation {
    /// Concatenates every recognized line across all result pages,
    /// preserving page order and line order within each page.
    ///
    /// The lines are joined without a separator, matching how the
    /// downstream proofreading step expects the text.
    pub fn concatenated_text(&self) -> String {
        self.analyze_result
            .as_ref()
            .map(|result| {
                result
                    .read_results
                    .iter()
                    .flat_map(|page| page.lines.iter())
                    .map(|line| line.text.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of recognized lines across all result pages.
    pub fn line_count(&self) -> usize {
        self.analyze_result
            .as_ref()
            .map(|result| result.read_results.iter().map(|page| page.lines.len()).sum())
            .unwrap_or(0)
    }
}

/// Recognition results for a completed operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    /// Per-page text blocks, in service order.
    #[serde(default)]
    pub read_results: Vec<ReadResult>,
}

/// One page (text block) of recognition results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadResult {
    /// 1-based page number, when reported.
    #[serde(default)]
    pub page: Option<u32>,
    /// Recognized lines in reading order.
    #[serde(default)]
    pub lines: Vec<ReadLine>,
}

/// A single recognized line of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadLine {
    /// The recognized text.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operation(json: serde_json::Value) -> ReadOperation {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn status_wire_values() {
        for (wire, status) in [
            ("notStarted", OperationStatus::NotStarted),
            ("running", OperationStatus::Running),
            ("succeeded", OperationStatus::Succeeded),
            ("failed", OperationStatus::Failed),
        ] {
            let parsed: OperationStatus =
                serde_json::from_value(serde_json::Value::String(wire.to_string())).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn only_pending_statuses_are_non_terminal() {
        assert!(!OperationStatus::NotStarted.is_terminal());
        assert!(!OperationStatus::Running.is_terminal());
        assert!(OperationStatus::Succeeded.is_terminal());
        assert!(OperationStatus::Failed.is_terminal());
    }

    #[test]
    fn concatenation_preserves_block_then_line_order() {
        let operation = operation(serde_json::json!({
            "status": "succeeded",
            "analyzeResult": {
                "readResults": [
                    {"page": 1, "lines": [{"text": "first "}, {"text": "second "}]},
                    {"page": 2, "lines": [{"text": "third"}]}
                ]
            }
        }));

        assert_eq!(operation.concatenated_text(), "first second third");
        assert_eq!(operation.line_count(), 3);
    }

    #[test]
    fn succeeded_without_lines_yields_empty_text() {
        let operation = operation(serde_json::json!({
            "status": "succeeded",
            "analyzeResult": {"readResults": [{"page": 1, "lines": []}]}
        }));

        assert_eq!(operation.concatenated_text(), "");
        assert_eq!(operation.line_count(), 0);
    }

    #[test]
    fn running_operation_has_no_result_yet() {
        let operation = operation(serde_json::json!({"status": "running"}));
        assert!(operation.analyze_result.is_none());
        assert_eq!(operation.concatenated_text(), "");
    }
}
