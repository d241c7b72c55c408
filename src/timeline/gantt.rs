/*!
 * Gantt Chart Geometry
 * Positions compressed blocks on a time axis for rendering
 */

use super::compress::TimelineBlock;
use crate::core::types::Ticks;
use crate::scheduler::TimelineUnit;
use serde::{Deserialize, Serialize};

/// A positioned block on the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttSegment {
    pub id: TimelineUnit,
    pub start: Ticks,
    pub end: Ticks,
    pub duration: Ticks,
    /// Share of the total makespan, 0..=100
    pub width_percent: f64,
}

/// Chart geometry for a whole schedule
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttChart {
    pub segments: Vec<GanttSegment>,
    pub makespan: Ticks,
}

impl GanttChart {
    pub fn from_blocks(blocks: &[TimelineBlock]) -> Self {
        let makespan: Ticks = blocks.iter().map(|b| b.duration).sum();
        let mut segments = Vec::with_capacity(blocks.len());
        let mut start: Ticks = 0;

        for block in blocks {
            let end = start + block.duration;
            let width_percent = if makespan == 0 {
                0.0
            } else {
                100.0 * block.duration as f64 / makespan as f64
            };
            segments.push(GanttSegment {
                id: block.id.clone(),
                start,
                end,
                duration: block.duration,
                width_percent,
            });
            start = end;
        }

        Self { segments, makespan }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Draw a two-line ASCII chart roughly `width` columns wide
    ///
    /// Every segment gets at least enough room for its label, so very
    /// short blocks can push the chart past `width`.
    pub fn render_text(&self, width: usize) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut bar = String::new();
        let mut axis = String::new();

        for segment in &self.segments {
            let label = segment.id.label();
            let scaled = (segment.width_percent / 100.0 * width as f64).round() as usize;
            let cells = scaled.max(label.len() + 2);

            bar.push_str(&format!("|{:^cells$}", label, cells = cells));
            axis.push_str(&format!("{:<cols$}", segment.start, cols = cells + 1));
        }
        bar.push('|');
        axis.push_str(&self.makespan.to_string());

        format!("{}\n{}", bar, axis)
    }
}
