use super::definition::{FlowGroup, ParsedFlowBox};

/// A trait for authored shapes that can be lowered into guide flow boxes.
///
/// Parsers produce whatever shape is natural for their format (the CSV parser
/// produces `FlowGroup`s, for instance). Implementing this trait gives the
/// import service a single canonical shape to position and persist.
///
/// # Example
///
/// ```rust
/// use guidebox::model::{IntoFlowBoxes, ParsedFlowBox, ParsedStep};
///
/// struct Checklist { name: String, items: Vec<String> }
///
/// impl IntoFlowBoxes for Checklist {
///     fn into_flow_boxes(self) -> Vec<ParsedFlowBox> {
///         vec![ParsedFlowBox {
///             title: self.name,
///             description: String::new(),
///             steps: self
///                 .items
///                 .into_iter()
///                 .map(|title| ParsedStep { title, content: String::new() })
///                 .collect(),
///         }]
///     }
/// }
///
/// let boxes = Checklist { name: "Day one".into(), items: vec!["Badge".into()] }.into_flow_boxes();
/// assert_eq!(boxes[0].steps.len(), 1);
/// ```
pub trait IntoFlowBoxes {
    /// Consumes the value and returns flow boxes in source order.
    fn into_flow_boxes(self) -> Vec<ParsedFlowBox>;
}

impl IntoFlowBoxes for Vec<ParsedFlowBox> {
    fn into_flow_boxes(self) -> Vec<ParsedFlowBox> {
        self
    }
}

impl IntoFlowBoxes for Vec<FlowGroup> {
    fn into_flow_boxes(self) -> Vec<ParsedFlowBox> {
        self.into_iter().map(ParsedFlowBox::from).collect()
    }
}
