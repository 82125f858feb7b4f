//! Session replay capture and GIF generation

use crate::algorithm::session::{FrameView, TickReport};
use crate::io::configuration::FINAL_FRAME_HOLD;
use crate::io::error::{QixError, Result};
use crate::io::image::render_frame;
use crate::spatial::{CellMask, Position};
use image::{Delay, Frame};
use std::path::Path;

/// Snapshot of one captured tick
///
/// Claimed cells are stored as the delta since the previous record so the
/// territory can be rebuilt by replaying records in order.
#[derive(Debug, Clone)]
pub struct FrameRecord {
    /// Tick at which the snapshot was taken
    pub tick: u64,
    /// Cells claimed since the previous record
    pub newly_claimed: Vec<Position>,
    /// Live trail polyline
    pub trail: Vec<Position>,
    /// Player cell
    pub player: Position,
    /// Hostile cell
    pub hostile: Position,
}

/// Captures session snapshots for an animated replay
///
/// Records every `interval`-th tick. Frames are rendered only at export time.
pub struct VisualizationCapture {
    initial_unclaimed: CellMask,
    interval: u64,
    pending_claims: Vec<Position>,
    records: Vec<FrameRecord>,
    last_recorded_tick: Option<u64>,
}

impl VisualizationCapture {
    /// Start a capture from the session's current territory
    ///
    /// An interval of zero records every tick.
    pub fn new(initial_unclaimed: CellMask, interval: u64) -> Self {
        Self {
            initial_unclaimed,
            interval: interval.max(1),
            pending_claims: Vec::new(),
            records: Vec::new(),
            last_recorded_tick: None,
        }
    }

    /// Observe a finished tick; snapshots it when the interval is due
    pub fn observe(&mut self, report: &TickReport, view: &FrameView<'_>) {
        self.pending_claims
            .extend_from_slice(report.claimed_cells());

        if report.tick % self.interval == 0 {
            self.record(report.tick, view);
        }
    }

    /// Snapshot the final state if the last observed tick was not recorded
    pub fn finish(&mut self, tick: u64, view: &FrameView<'_>) {
        if self.last_recorded_tick != Some(tick) {
            self.record(tick, view);
        }
    }

    fn record(&mut self, tick: u64, view: &FrameView<'_>) {
        self.records.push(FrameRecord {
            tick,
            newly_claimed: std::mem::take(&mut self.pending_claims),
            trail: view.trail.clone(),
            player: view.player,
            hostile: view.hostile,
        });
        self.last_recorded_tick = Some(tick);
    }

    /// Recorded snapshots in tick order
    pub fn records(&self) -> &[FrameRecord] {
        &self.records
    }

    /// Number of recorded snapshots
    pub fn frame_count(&self) -> usize {
        self.records.len()
    }

    /// Replay the records into an animated GIF
    ///
    /// Frames are rendered and encoded one at a time. The last frame is held
    /// longer so the final territory stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.records.is_empty() {
            return Err(QixError::InvalidParameter {
                parameter: "visualization",
                value: output_path.display().to_string(),
                reason: "no frames captured for visualization".to_string(),
            });
        }

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| QixError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| QixError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        let mut unclaimed = self.initial_unclaimed.clone();
        let last = self.records.len() - 1;

        for (index, record) in self.records.iter().enumerate() {
            for &cell in &record.newly_claimed {
                unclaimed.set(cell, false);
            }

            let view = FrameView {
                unclaimed: &unclaimed,
                trail: record.trail.clone(),
                player: record.player,
                hostile: record.hostile,
            };
            let delay = if index == last {
                frame_delay_ms * FINAL_FRAME_HOLD
            } else {
                frame_delay_ms
            };
            let frame = Frame::from_parts(
                render_frame(&view),
                0,
                0,
                Delay::from_numer_denom_ms(delay, 1),
            );

            encoder
                .encode_frame(frame)
                .map_err(|e| QixError::ImageExport {
                    path: output_path.to_path_buf(),
                    source: e,
                })?;
        }

        Ok(())
    }
}
