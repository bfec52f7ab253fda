use crate::error::StorageError;
use crate::model::{ParsedFlowBox, ParsedStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep<'a> {
    pub position: u32,
    pub step: &'a ParsedStep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFlowBox<'a> {
    pub position: u32,
    pub flow_box: &'a ParsedFlowBox,
    pub steps: Vec<PlannedStep<'a>>,
}

/// Assigns positions to freshly parsed flow boxes.
///
/// New flow boxes are appended after `existing_max` (starting at 1 for an empty
/// guide). Step positions restart at 1 inside every flow box. Fails with
/// `StorageError::PositionOverflow` instead of wrapping when a position would
/// not fit in a `u32`.
pub fn plan_positions(
    existing_max: Option<u32>,
    flow_boxes: &[ParsedFlowBox],
) -> Result<Vec<PlannedFlowBox<'_>>, StorageError> {
    let first = match existing_max {
        Some(max) => max.checked_add(1).ok_or(StorageError::PositionOverflow)?,
        None => 1,
    };

    flow_boxes
        .iter()
        .enumerate()
        .map(|(index, flow_box)| {
            Ok::<_, StorageError>(PlannedFlowBox {
                position: offset(first, index)?,
                flow_box,
                steps: flow_box
                    .steps
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        Ok::<_, StorageError>(PlannedStep {
                            position: offset(1, index)?,
                            step,
                        })
                    })
                    .collect::<Result<_, _>>()?,
            })
        })
        .collect()
}

fn offset(start: u32, index: usize) -> Result<u32, StorageError> {
    u32::try_from(index)
        .ok()
        .and_then(|index| start.checked_add(index))
        .ok_or(StorageError::PositionOverflow)
}
