//! Common test utilities: sample documents and a store that can be told to fail.
use guidebox::error::StorageError;
use guidebox::storage::{GuideStore, MemoryStore, NewFlowBox, NewStep};

/// Two flow boxes; the first has an italic description.
#[allow(dead_code)]
pub const SETUP_MARKDOWN: &str = "## Setup
*Get ready*

### Install
Run npm install

## Configure

### Set env vars
Add API_KEY to .env
";

/// Three rows across two flows, in the canonical column order.
#[allow(dead_code)]
pub const SAMPLE_CSV: &str = "Flow Name,Flow Description,Step Title,Content
A,descA,S1,C1
A,descA,S2,C2
B,descB,S3,C3
";

/// Wraps a `MemoryStore` and fails every insert after `fail_after` successful ones.
#[allow(dead_code)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_after: usize,
    pub inserts: usize,
}

#[allow(dead_code)]
impl FlakyStore {
    pub fn new(fail_after: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_after,
            inserts: 0,
        }
    }

    fn tick(&mut self) -> Result<(), StorageError> {
        if self.inserts >= self.fail_after {
            return Err(StorageError::Generic("connection reset".to_string()));
        }
        self.inserts += 1;
        Ok(())
    }
}

impl GuideStore for FlakyStore {
    fn max_flow_box_position(&self, guide_id: &str) -> Result<Option<u32>, StorageError> {
        self.inner.max_flow_box_position(guide_id)
    }

    fn insert_flow_box(
        &mut self,
        guide_id: &str,
        flow_box: NewFlowBox<'_>,
    ) -> Result<u64, StorageError> {
        self.tick()?;
        self.inner.insert_flow_box(guide_id, flow_box)
    }

    fn insert_step(&mut self, flow_box_id: u64, step: NewStep<'_>) -> Result<u64, StorageError> {
        self.tick()?;
        self.inner.insert_step(flow_box_id, step)
    }
}
