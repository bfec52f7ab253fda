//! The persistence seam between parsed content and a guide.
//!
//! The importer never assigns ids or positions itself. It plans positions with
//! [`plan_positions`] and hands each record to a [`GuideStore`], which owns id
//! allocation and whatever transactional discipline its backend needs.

use crate::error::StorageError;

pub mod export;
pub mod memory;
pub mod position;

pub use export::export_markdown;
pub use memory::{FlowBoxRecord, MemoryStore, StepRecord};
pub use position::{PlannedFlowBox, PlannedStep, plan_positions};

/// A flow box ready to be written, with its final position.
#[derive(Debug, Clone, Copy)]
pub struct NewFlowBox<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub position: u32,
}

/// A step ready to be written, positioned within its flow box.
#[derive(Debug, Clone, Copy)]
pub struct NewStep<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub position: u32,
}

/// Downstream storage for guide content.
pub trait GuideStore {
    /// Highest flow box position already used by `guide_id`, if it has any.
    fn max_flow_box_position(&self, guide_id: &str) -> Result<Option<u32>, StorageError>;

    /// Persists a flow box and returns its new id.
    fn insert_flow_box(
        &mut self,
        guide_id: &str,
        flow_box: NewFlowBox<'_>,
    ) -> Result<u64, StorageError>;

    /// Persists a step under an existing flow box and returns its new id.
    fn insert_step(&mut self, flow_box_id: u64, step: NewStep<'_>) -> Result<u64, StorageError>;
}
