/*!
 * Timeline Compression
 * Run-length encoding of the per-unit execution trace
 */

use crate::core::types::Ticks;
use crate::scheduler::TimelineUnit;
use serde::{Deserialize, Serialize};
use std::iter;

/// A run of identical consecutive timeline units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBlock {
    pub id: TimelineUnit,
    pub duration: Ticks,
}

impl TimelineBlock {
    pub fn new(id: TimelineUnit, duration: Ticks) -> Self {
        Self { id, duration }
    }

    #[inline(always)]
    pub fn is_idle(&self) -> bool {
        self.id.is_idle()
    }
}

/// Merge consecutive identical units into blocks
pub fn compress(timeline: &[TimelineUnit]) -> Vec<TimelineBlock> {
    let mut blocks: Vec<TimelineBlock> = Vec::new();

    for unit in timeline {
        match blocks.last_mut() {
            Some(block) if block.id == *unit => block.duration += 1,
            _ => blocks.push(TimelineBlock::new(unit.clone(), 1)),
        }
    }

    blocks
}

/// Inverse of [`compress`]
pub fn expand(blocks: &[TimelineBlock]) -> Vec<TimelineUnit> {
    blocks
        .iter()
        .flat_map(|block| iter::repeat(block.id.clone()).take(block.duration as usize))
        .collect()
}
