use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::json;

/// Per-flow line of an import summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSummary {
    pub name: String,
    pub step_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub message: String,
    pub flow_boxes_created: usize,
    pub steps_created: usize,
    pub flows: Vec<FlowSummary>,
    pub imported_at: DateTime<Utc>,
}

/// A failure caught while processing or persisting rows. Counts reflect what
/// was written before the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFailure {
    pub message: String,
    pub flow_boxes_created: usize,
    pub steps_created: usize,
    pub failed_at: DateTime<Utc>,
}

/// The result of an import that got past validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported(ImportSummary),
    Failed(ImportFailure),
}

impl ImportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ImportOutcome::Imported(_))
    }

    pub fn message(&self) -> &str {
        match self {
            ImportOutcome::Imported(summary) => &summary.message,
            ImportOutcome::Failed(failure) => &failure.message,
        }
    }

    pub fn flow_boxes_created(&self) -> usize {
        match self {
            ImportOutcome::Imported(summary) => summary.flow_boxes_created,
            ImportOutcome::Failed(failure) => failure.flow_boxes_created,
        }
    }

    pub fn steps_created(&self) -> usize {
        match self {
            ImportOutcome::Imported(summary) => summary.steps_created,
            ImportOutcome::Failed(failure) => failure.steps_created,
        }
    }

    /// Renders the outcome in the JSON shape HTTP callers expect:
    /// `{ success, message, results: { flowBoxesCreated, stepsCreated, flows }, importedAt }`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ImportOutcome::Imported(summary) => json!({
                "success": true,
                "message": summary.message,
                "results": {
                    "flowBoxesCreated": summary.flow_boxes_created,
                    "stepsCreated": summary.steps_created,
                    "flows": summary.flows,
                },
                "importedAt": summary.imported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            }),
            ImportOutcome::Failed(failure) => json!({
                "success": false,
                "message": failure.message,
                "results": {
                    "flowBoxesCreated": failure.flow_boxes_created,
                    "stepsCreated": failure.steps_created,
                    "flows": [],
                },
                "importedAt": failure.failed_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            }),
        }
    }
}
