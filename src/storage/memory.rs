use super::{GuideStore, NewFlowBox, NewStep};
use crate::error::StorageError;
use ahash::AHashMap;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FlowBoxRecord {
    pub id: u64,
    pub guide_id: String,
    pub title: String,
    pub description: String,
    pub position: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub id: u64,
    pub flow_box_id: u64,
    pub title: String,
    pub content: String,
    pub position: u32,
}

/// An in-process `GuideStore`. Ids are allocated sequentially from 1 and shared
/// between flow boxes and steps.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MemoryStore {
    flow_boxes: AHashMap<u64, FlowBoxRecord>,
    steps: AHashMap<u64, StepRecord>,
    last_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    /// Ids of every guide holding at least one flow box, sorted.
    pub fn guides(&self) -> Vec<&str> {
        self.flow_boxes
            .values()
            .map(|fb| fb.guide_id.as_str())
            .unique()
            .sorted()
            .collect()
    }

    /// Flow boxes of a guide, ordered by position.
    pub fn flow_boxes(&self, guide_id: &str) -> Vec<&FlowBoxRecord> {
        self.flow_boxes
            .values()
            .filter(|fb| fb.guide_id == guide_id)
            .sorted_by_key(|fb| (fb.position, fb.id))
            .collect()
    }

    /// Steps of a flow box, ordered by position.
    pub fn steps(&self, flow_box_id: u64) -> Vec<&StepRecord> {
        self.steps
            .values()
            .filter(|step| step.flow_box_id == flow_box_id)
            .sorted_by_key(|step| (step.position, step.id))
            .collect()
    }

    /// Encodes the whole store, records and id counter, as a bincode snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StorageError> {
        encode_to_vec(self, standard())
            .map_err(|e| StorageError::Generic(format!("Snapshot encoding failed: {}", e)))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StorageError> {
        decode_from_slice(bytes, standard())
            .map(|(store, _)| store)
            .map_err(|e| StorageError::Generic(format!("Deserialization failed: {}", e)))
    }

    /// Writes a snapshot to `path`, replacing any previous file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let path = path.as_ref();
        fs::write(path, self.to_bytes()?).map_err(|e| snapshot_io_error("write", path, e))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| snapshot_io_error("read", path, e))?;
        Self::from_bytes(&bytes)
    }
}

fn snapshot_io_error(action: &str, path: &Path, error: io::Error) -> StorageError {
    StorageError::Generic(format!(
        "Could not {} snapshot '{}': {}",
        action,
        path.display(),
        error
    ))
}

impl GuideStore for MemoryStore {
    fn max_flow_box_position(&self, guide_id: &str) -> Result<Option<u32>, StorageError> {
        Ok(self
            .flow_boxes
            .values()
            .filter(|fb| fb.guide_id == guide_id)
            .map(|fb| fb.position)
            .max())
    }

    fn insert_flow_box(
        &mut self,
        guide_id: &str,
        flow_box: NewFlowBox<'_>,
    ) -> Result<u64, StorageError> {
        let id = self.next_id();
        self.flow_boxes.insert(
            id,
            FlowBoxRecord {
                id,
                guide_id: guide_id.to_string(),
                title: flow_box.title.to_string(),
                description: flow_box.description.to_string(),
                position: flow_box.position,
            },
        );
        Ok(id)
    }

    fn insert_step(&mut self, flow_box_id: u64, step: NewStep<'_>) -> Result<u64, StorageError> {
        if !self.flow_boxes.contains_key(&flow_box_id) {
            return Err(StorageError::FlowBoxNotFound(flow_box_id));
        }
        let id = self.next_id();
        self.steps.insert(
            id,
            StepRecord {
                id,
                flow_box_id,
                title: step.title.to_string(),
                content: step.content.to_string(),
                position: step.position,
            },
        );
        Ok(id)
    }
}
