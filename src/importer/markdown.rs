//! Markdown guide parsing.
//!
//! The authored convention is:
//!
//! ```text
//! ## <Flow Box Title>
//! *<optional one-line italic description>*
//!
//! ### <Step Title>
//! <free-form content, possibly multi-line>
//! ```
//!
//! Parsing is a single forward pass with one line of lookahead. Anything that
//! does not fit the convention is ignored, so this parser never fails.

use crate::error::ImportError;
use crate::model::{ParsedFlowBox, ParsedStep};
use tracing::debug;

use super::ContentParser;

const FLOW_BOX_MARKER: &str = "## ";
const STEP_MARKER: &str = "### ";

/// Registry entry for the `markdown` format.
pub struct MarkdownParser;

impl ContentParser for MarkdownParser {
    fn format(&self) -> &str {
        "markdown"
    }

    fn parse(&self, text: &str) -> Result<Vec<ParsedFlowBox>, ImportError> {
        Ok(parse_markdown(text))
    }
}

/// Parses a Markdown document into flow boxes in order of appearance.
pub fn parse_markdown(text: &str) -> Vec<ParsedFlowBox> {
    let lines: Vec<&str> = text.lines().collect();
    let mut state = MarkdownState::default();

    let mut cursor = 0;
    while cursor < lines.len() {
        let raw = lines[cursor];
        let line = raw.trim();
        cursor += 1;

        if let Some(title) = line.strip_prefix(FLOW_BOX_MARKER) {
            state.close_flow_box();
            let mut flow_box = ParsedFlowBox::new(title.trim());
            if let Some(description) = lines.get(cursor).and_then(|next| italic_description(next)) {
                flow_box.description = description.to_string();
                cursor += 1;
            }
            state.current_box = Some(flow_box);
        } else if let Some(title) = line.strip_prefix(STEP_MARKER) {
            state.close_step();
            if state.current_box.is_some() {
                state.current_step = Some(title.trim().to_string());
            } else {
                debug!(line = cursor, title = title.trim(), "discarding step heading outside of a flow box");
            }
        } else if !line.is_empty() && state.current_step.is_some() {
            // Body lines keep their original indentation.
            state.content.push(raw);
        }
    }

    state.finish()
}

/// Returns the inner text of a `*description*` line.
fn italic_description(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.len() >= 2 && line.starts_with('*') && line.ends_with('*') {
        Some(&line[1..line.len() - 1])
    } else {
        None
    }
}

#[derive(Default)]
struct MarkdownState<'a> {
    flow_boxes: Vec<ParsedFlowBox>,
    current_box: Option<ParsedFlowBox>,
    current_step: Option<String>,
    content: Vec<&'a str>,
}

impl MarkdownState<'_> {
    fn close_step(&mut self) {
        if let Some(title) = self.current_step.take() {
            let content = self.content.join("\n").trim().to_string();
            // `current_step` is only ever set while a flow box is open.
            if let Some(flow_box) = self.current_box.as_mut() {
                flow_box.steps.push(ParsedStep { title, content });
            }
        }
        self.content.clear();
    }

    fn close_flow_box(&mut self) {
        self.close_step();
        if let Some(flow_box) = self.current_box.take() {
            self.flow_boxes.push(flow_box);
        }
    }

    fn finish(mut self) -> Vec<ParsedFlowBox> {
        self.close_flow_box();
        self.flow_boxes
    }
}
