//! # Guidebox - Guide Content Importer
//!
//! **Guidebox** turns externally authored onboarding content into the ordered
//! flow boxes and steps of a guide. Authors write Markdown or CSV; Guidebox
//! parses it, assigns positions after whatever the guide already contains, and
//! hands each record to a storage backend.
//!
//! ## Core Workflow
//!
//! 1.  **Parse**: `parse_markdown` and `parse_csv` are pure functions over a string.
//!     Markdown parsing never fails; CSV parsing rejects structurally invalid input.
//! 2.  **Plan**: `plan_positions` appends new flow boxes after the highest existing
//!     position of the target guide and numbers steps from 1 inside each flow box.
//! 3.  **Persist**: a `GuideStore` writes the records and assigns ids. `MemoryStore`
//!     is the bundled in-process implementation.
//! 4.  **Report**: every import that passes validation yields an `ImportOutcome`,
//!     either `Imported` or `Failed`.
//!
//! ## Quick Start
//!
//! ```rust
//! use guidebox::prelude::*;
//!
//! let markdown = "## Setup\n*Get ready*\n\n### Install\nRun npm install\n";
//!
//! let importer = GuideImporter::builder().build();
//! let mut store = MemoryStore::new();
//!
//! let outcome = importer
//!     .import_markdown(&mut store, "onboarding", markdown)
//!     .expect("markdown is never rejected");
//!
//! assert!(outcome.is_success());
//! assert_eq!(outcome.flow_boxes_created(), 1);
//! assert_eq!(store.flow_boxes("onboarding")[0].title, "Setup");
//! println!("{}", ReportFormatter::format(&outcome));
//! ```

pub mod error;
pub mod importer;
pub mod model;
pub mod prelude;
pub mod report;
pub mod storage;
