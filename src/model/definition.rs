use serde::{Deserialize, Serialize};

/// A single actionable unit of content inside a flow box.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedStep {
    pub title: String,
    pub content: String,
}

/// One logical section of a guide, with its steps in source order.
/// Parsed records carry no ids or positions; those are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedFlowBox {
    pub title: String,
    pub description: String,
    pub steps: Vec<ParsedStep>,
}

impl ParsedFlowBox {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// The CSV grouping shape: every row sharing a flow name lands in one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowGroup {
    pub flow_name: String,
    pub description: String,
    pub steps: Vec<ParsedStep>,
}

impl From<FlowGroup> for ParsedFlowBox {
    fn from(group: FlowGroup) -> Self {
        ParsedFlowBox {
            title: group.flow_name,
            description: group.description,
            steps: group.steps,
        }
    }
}
