//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the guidebox crate.
//!
//! # Example
//!
//! ```rust
//! use guidebox::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let csv = "Flow Name,Flow Description,Step Title,Content\nSetup,Get ready,Install,Run it";
//! let groups = parse_csv(csv)?;
//! assert_eq!(groups[0].flow_name, "Setup");
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Parsing and importing
pub use crate::importer::{
    ContentParser, CsvParser, GuideImporter, ImportFormat, ImporterBuilder, MarkdownParser,
    csv_template, markdown_template, parse_csv, parse_markdown,
};

// Parsed records
pub use crate::model::{FlowGroup, IntoFlowBoxes, ParsedFlowBox, ParsedStep};

// Storage
pub use crate::storage::{GuideStore, MemoryStore, export_markdown, plan_positions};

// Reporting
pub use crate::report::{ImportOutcome, ReportFormatter};

// Error types
pub use crate::error::{ImportError, StorageError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
