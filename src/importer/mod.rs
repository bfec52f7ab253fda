use crate::error::{ImportError, StorageError};
use crate::model::ParsedFlowBox;
use crate::report::{FlowSummary, ImportFailure, ImportOutcome, ImportSummary};
use crate::storage::{GuideStore, NewFlowBox, NewStep, plan_positions};
use ahash::AHashMap;
use chrono::Utc;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

pub mod csv;
pub mod markdown;
pub mod template;

pub use self::csv::{CsvParser, parse_csv, split_csv_line};
pub use self::markdown::{MarkdownParser, parse_markdown};
pub use self::template::{csv_template, markdown_template};

/// Defines the contract for turning one authored format into flow boxes.
pub trait ContentParser: Send + Sync {
    fn format(&self) -> &str;
    fn parse(&self, text: &str) -> Result<Vec<ParsedFlowBox>, ImportError>;
}

/// The formats understood out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Markdown,
    Csv,
}

impl ImportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ImportFormat::Markdown => "markdown",
            ImportFormat::Csv => "csv",
        }
    }

    /// Detects the format from a file extension (`.md`, `.markdown`, `.csv`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ImportError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ImportError::UnknownFormat(path.display().to_string()))?;
        extension.parse()
    }
}

impl FromStr for ImportFormat {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(ImportFormat::Markdown),
            "csv" => Ok(ImportFormat::Csv),
            other => Err(ImportError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ImporterBuilder {
    registry: AHashMap<String, Box<dyn ContentParser>>,
    aliases: AHashMap<String, String>,
    require_step_titles: bool,
}

impl ImporterBuilder {
    pub fn new() -> Self {
        let mut aliases = AHashMap::new();
        aliases.insert("md".to_string(), ImportFormat::Markdown.as_str().to_string());
        Self {
            registry: AHashMap::new(),
            aliases,
            require_step_titles: false,
        }
    }

    /// Lets `alias` select a built-in or already registered format. Both names
    /// are case-insensitive. Unknown targets are ignored.
    pub fn with_format_alias(mut self, alias: &str, format: &str) -> Self {
        let format = format.to_ascii_lowercase();
        if self.registry.contains_key(&format) || is_builtin(&format) {
            self.aliases.insert(alias.to_ascii_lowercase(), format);
        }
        self
    }

    /// Registers a parser under its `format()` name. A custom parser named
    /// `markdown` or `csv` takes the place of the built-in one.
    pub fn with_custom_parser(mut self, parser: Box<dyn ContentParser>) -> Self {
        self.registry
            .insert(parser.format().to_ascii_lowercase(), parser);
        self
    }

    /// Makes the built-in `csv` parser skip rows lacking a step title.
    pub fn require_step_titles(mut self, required: bool) -> Self {
        self.require_step_titles = required;
        self
    }

    pub fn build(self) -> GuideImporter {
        let mut registry = self.registry;
        registry
            .entry(ImportFormat::Markdown.as_str().to_string())
            .or_insert_with(|| Box::new(MarkdownParser) as Box<dyn ContentParser>);
        registry
            .entry(ImportFormat::Csv.as_str().to_string())
            .or_insert_with(|| {
                Box::new(CsvParser {
                    require_step_titles: self.require_step_titles,
                }) as Box<dyn ContentParser>
            });
        GuideImporter {
            registry,
            aliases: self.aliases,
        }
    }
}

fn is_builtin(format: &str) -> bool {
    [ImportFormat::Markdown, ImportFormat::Csv]
        .iter()
        .any(|builtin| builtin.as_str() == format)
}

impl Default for ImporterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses authored content and writes it into a guide through a `GuideStore`.
///
/// Two failure paths are kept apart:
/// - rejections (`Validation`, `UnknownFormat`) are returned as `Err` before
///   anything is written;
/// - failures while processing rows or persisting them are caught and returned
///   as `Ok(ImportOutcome::Failed(..))`.
pub struct GuideImporter {
    registry: AHashMap<String, Box<dyn ContentParser>>,
    aliases: AHashMap<String, String>,
}

impl Default for GuideImporter {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GuideImporter {
    pub fn builder() -> ImporterBuilder {
        ImporterBuilder::new()
    }

    /// Names of every registered format, sorted.
    pub fn formats(&self) -> Vec<&str> {
        let mut formats: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        formats.sort_unstable();
        formats
    }

    /// Looks up the parser for a format name or alias (case-insensitive).
    pub fn parser(&self, format: &str) -> Result<&dyn ContentParser, ImportError> {
        let key = format.to_ascii_lowercase();
        let key = self.aliases.get(&key).unwrap_or(&key);
        self.registry
            .get(key)
            .map(|parser| &**parser)
            .ok_or_else(|| ImportError::UnknownFormat(format.to_string()))
    }

    pub fn parse(&self, format: &str, text: &str) -> Result<Vec<ParsedFlowBox>, ImportError> {
        self.parser(format)?.parse(text)
    }

    pub fn import_markdown<S: GuideStore + ?Sized>(
        &self,
        store: &mut S,
        guide_id: &str,
        text: &str,
    ) -> Result<ImportOutcome, ImportError> {
        self.import(store, guide_id, ImportFormat::Markdown.as_str(), text)
    }

    pub fn import_csv<S: GuideStore + ?Sized>(
        &self,
        store: &mut S,
        guide_id: &str,
        text: &str,
    ) -> Result<ImportOutcome, ImportError> {
        self.import(store, guide_id, ImportFormat::Csv.as_str(), text)
    }

    /// Parses `text` as `format` and appends the result to `guide_id`.
    pub fn import<S: GuideStore + ?Sized>(
        &self,
        store: &mut S,
        guide_id: &str,
        format: &str,
        text: &str,
    ) -> Result<ImportOutcome, ImportError> {
        let flow_boxes = match self.parse(format, text) {
            Ok(flow_boxes) => flow_boxes,
            Err(e) if e.is_rejection() => return Err(e),
            Err(e) => return Ok(Self::failed(guide_id, &e, Tally::default())),
        };

        let mut tally = Tally::default();
        if let Err(e) = Self::persist(store, guide_id, &flow_boxes, &mut tally) {
            return Ok(Self::failed(guide_id, &ImportError::Storage(e), tally));
        }

        let message = if flow_boxes.is_empty() {
            "No flow boxes found to import".to_string()
        } else {
            format!(
                "Successfully imported {} flow boxes with {} steps",
                tally.flow_boxes, tally.steps
            )
        };
        info!(
            guide_id,
            format,
            flow_boxes = tally.flow_boxes,
            steps = tally.steps,
            "import complete"
        );

        Ok(ImportOutcome::Imported(ImportSummary {
            message,
            flow_boxes_created: tally.flow_boxes,
            steps_created: tally.steps,
            flows: flow_boxes
                .iter()
                .map(|fb| FlowSummary {
                    name: fb.title.clone(),
                    step_count: fb.steps.len(),
                })
                .collect(),
            imported_at: Utc::now(),
        }))
    }

    fn persist<S: GuideStore + ?Sized>(
        store: &mut S,
        guide_id: &str,
        flow_boxes: &[ParsedFlowBox],
        tally: &mut Tally,
    ) -> Result<(), StorageError> {
        let existing_max = store.max_flow_box_position(guide_id)?;
        for planned in plan_positions(existing_max, flow_boxes)? {
            let flow_box_id = store.insert_flow_box(
                guide_id,
                NewFlowBox {
                    title: &planned.flow_box.title,
                    description: &planned.flow_box.description,
                    position: planned.position,
                },
            )?;
            tally.flow_boxes += 1;

            for planned_step in &planned.steps {
                store.insert_step(
                    flow_box_id,
                    NewStep {
                        title: &planned_step.step.title,
                        content: &planned_step.step.content,
                        position: planned_step.position,
                    },
                )?;
                tally.steps += 1;
            }
        }
        Ok(())
    }

    fn failed(guide_id: &str, error: &ImportError, tally: Tally) -> ImportOutcome {
        warn!(guide_id, error = %error, "import failed");
        ImportOutcome::Failed(ImportFailure {
            message: error.to_string(),
            flow_boxes_created: tally.flow_boxes,
            steps_created: tally.steps,
            failed_at: Utc::now(),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    flow_boxes: usize,
    steps: usize,
}
