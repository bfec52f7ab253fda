//! CSV guide parsing.
//!
//! Rows are grouped by flow name; every row contributes one step. The header
//! must name the four columns in `REQUIRED_COLUMNS` (in any order), but data
//! rows are always read by position in the `REQUIRED_COLUMNS` order. Quoted
//! fields may contain commas but not line breaks.

use crate::error::ImportError;
use crate::model::{FlowGroup, IntoFlowBoxes, ParsedFlowBox, ParsedStep};
use ahash::RandomState;
use indexmap::IndexMap;
use itertools::Itertools;
use tracing::debug;

use super::ContentParser;

pub const FLOW_NAME: &str = "Flow Name";
pub const FLOW_DESCRIPTION: &str = "Flow Description";
pub const STEP_TITLE: &str = "Step Title";
pub const CONTENT: &str = "Content";

pub const REQUIRED_COLUMNS: [&str; 4] = [FLOW_NAME, FLOW_DESCRIPTION, STEP_TITLE, CONTENT];

/// Registry entry for the `csv` format.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser {
    /// Skip rows whose step title is empty instead of importing an untitled step.
    pub require_step_titles: bool,
}

impl ContentParser for CsvParser {
    fn format(&self) -> &str {
        "csv"
    }

    fn parse(&self, text: &str) -> Result<Vec<ParsedFlowBox>, ImportError> {
        Ok(self.parse_groups(text)?.into_flow_boxes())
    }
}

impl CsvParser {
    /// Groups the data rows of `text` by flow name, in first-seen order.
    pub fn parse_groups(&self, text: &str) -> Result<Vec<FlowGroup>, ImportError> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() < 2 {
            return Err(ImportError::Validation(
                "CSV must have at least a header and one data row".to_string(),
            ));
        }

        validate_header(lines[0])?;
        let mut groups: IndexMap<String, FlowGroup, RandomState> =
            IndexMap::with_hasher(RandomState::new());

        for (index, line) in lines.iter().enumerate().skip(1) {
            let fields = split_csv_line(line);
            let Some(row) = CsvRow::from_fields(&fields) else {
                debug!(row = index, fields = fields.len(), "skipping short CSV row");
                continue;
            };
            if row.flow_name.is_empty() {
                debug!(row = index, "skipping CSV row without a flow name");
                continue;
            }
            if self.require_step_titles && row.step_title.is_empty() {
                debug!(row = index, "skipping CSV row without a step title");
                continue;
            }

            groups
                .entry(row.flow_name.to_string())
                .or_insert_with(|| FlowGroup {
                    flow_name: row.flow_name.to_string(),
                    description: row.description.to_string(),
                    steps: Vec::new(),
                })
                .steps
                .push(ParsedStep {
                    title: row.step_title.to_string(),
                    content: row.content.to_string(),
                });
        }

        if groups.is_empty() {
            return Err(ImportError::NoValidRows);
        }
        Ok(groups.into_values().collect())
    }
}

/// Parses CSV text with the default parser settings.
pub fn parse_csv(text: &str) -> Result<Vec<FlowGroup>, ImportError> {
    CsvParser::default().parse_groups(text)
}

/// Splits one CSV line into fields.
///
/// A double quote toggles quoted mode and is not kept; commas inside quotes do
/// not split. Each field is trimmed and loses one pair of surrounding quotes.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(finish_field(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(finish_field(&mut field));
    fields
}

fn finish_field(field: &mut String) -> String {
    let raw = std::mem::take(field);
    strip_quotes(raw.trim()).trim().to_string()
}

fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Checks that the header names every required column, in any order.
fn validate_header(line: &str) -> Result<(), ImportError> {
    let headers: Vec<&str> = line.split(',').map(|h| strip_quotes(h.trim())).collect();
    let missing = REQUIRED_COLUMNS
        .iter()
        .filter(|name| !headers.contains(*name))
        .join(", ");
    if missing.is_empty() {
        return Ok(());
    }
    Err(ImportError::Validation(format!(
        "CSV header is missing required columns: {}. Expected: {}",
        missing,
        REQUIRED_COLUMNS.join(", ")
    )))
}

/// A data row read by position: flow name, description, step title, content.
/// Fields past the fourth are ignored.
struct CsvRow<'a> {
    flow_name: &'a str,
    description: &'a str,
    step_title: &'a str,
    content: &'a str,
}

impl<'a> CsvRow<'a> {
    fn from_fields(fields: &'a [String]) -> Option<Self> {
        match fields {
            [flow_name, description, step_title, content, ..] => Some(Self {
                flow_name,
                description,
                step_title,
                content,
            }),
            _ => None,
        }
    }
}
