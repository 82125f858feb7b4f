//! Session orchestration for the per-tick update order
//!
//! A tick feeds one directional intent to the path tracker (which may resolve
//! a claim synchronously), moves the hostile, then runs the collision
//! monitor. Rendering happens outside, from [`Session::view`].

use log::info;

use crate::algorithm::collision;
use crate::algorithm::hostile::{Hostile, HostileMove};
use crate::algorithm::path::{PathTracker, StepOutcome};
use crate::algorithm::resolver::Resolution;
use crate::io::configuration::{
    DEFAULT_BORDER_WIDTH, DEFAULT_HEIGHT, DEFAULT_HOSTILE_SPEED, DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::adjacency::is_boundary;
use crate::spatial::{CellMask, Direction, Field, Position};

/// Parameters fixed for the lifetime of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Field width in cells
    pub width: usize,
    /// Field height in cells
    pub height: usize,
    /// Width of the initially claimed border ring
    pub border_width: usize,
    /// Cells the hostile advances per tick
    pub hostile_speed: i32,
    /// Player start cell; defaults to the inner corner of the border
    pub player_start: Option<Position>,
    /// Hostile start cell; defaults to the field centre
    pub hostile_start: Option<Position>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            border_width: DEFAULT_BORDER_WIDTH,
            hostile_speed: DEFAULT_HOSTILE_SPEED,
            player_start: None,
            hostile_start: None,
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number, starting at 1
    pub tick: u64,
    /// Path tracker outcome for this tick's intent
    pub step: StepOutcome,
    /// Hostile motion result
    pub hostile: HostileMove,
    /// Whether the collision monitor aborted the open path
    pub aborted: bool,
}

impl TickReport {
    /// Cells claimed during this tick
    pub fn claimed_cells(&self) -> &[Position] {
        match &self.step {
            StepOutcome::Closed {
                resolution: Resolution::Claimed { cells, .. },
                ..
            } => cells.as_slice(),
            _ => &[],
        }
    }
}

/// Running totals over a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Ticks executed
    pub ticks: u64,
    /// Closures that annexed a region
    pub claims: u64,
    /// Closures that annexed nothing
    pub unresolved: u64,
    /// Paths aborted by the hostile
    pub aborts: u64,
}

/// Read-only snapshot handed to the render collaborator
#[derive(Debug, Clone)]
pub struct FrameView<'a> {
    /// Unclaimed cells of the field
    pub unclaimed: &'a CellMask,
    /// Live trail polyline, empty while idle
    pub trail: Vec<Position>,
    /// Player cell
    pub player: Position,
    /// Hostile cell
    pub hostile: Position,
}

/// A single game session: field, player, hostile and tick counter
#[derive(Debug, Clone)]
pub struct Session {
    field: Field,
    tracker: PathTracker,
    hostile: Hostile,
    start: Position,
    stats: SessionStats,
}

impl Session {
    /// Create a session with a seeded hostile
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The field dimensions or border width are invalid
    /// - The hostile speed is not positive or exceeds the larger dimension
    /// - The player start is not a boundary cell
    /// - The hostile start is not an unclaimed cell
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self> {
        let field = Field::new(config.width, config.height, config.border_width)?;

        if config.hostile_speed <= 0 {
            return Err(invalid_parameter(
                "hostile_speed",
                &config.hostile_speed,
                &"hostile must advance at least one cell per tick",
            ));
        }
        let max_speed = config.width.max(config.height);
        if config.hostile_speed as usize > max_speed {
            return Err(invalid_parameter(
                "hostile_speed",
                &config.hostile_speed,
                &format!("hostile cannot advance more than {max_speed} cells per tick"),
            ));
        }

        let border = config.border_width as i32;
        let start = config.player_start.unwrap_or([border, border]);
        if !is_boundary(&field, start) {
            return Err(invalid_parameter(
                "player_start",
                &format!("{start:?}"),
                &"player must start on the boundary",
            ));
        }

        let hostile_start = config
            .hostile_start
            .unwrap_or([(config.width / 2) as i32, (config.height / 2) as i32]);
        if !field.is_unclaimed(hostile_start) {
            return Err(invalid_parameter(
                "hostile_start",
                &format!("{hostile_start:?}"),
                &"hostile must start on an unclaimed cell",
            ));
        }

        Ok(Self {
            field,
            tracker: PathTracker::new(start),
            hostile: Hostile::new(hostile_start, Direction::Right, config.hostile_speed, seed),
            start,
            stats: SessionStats::default(),
        })
    }

    /// The playing field
    pub const fn field(&self) -> &Field {
        &self.field
    }

    /// The player's path tracker
    pub const fn tracker(&self) -> &PathTracker {
        &self.tracker
    }

    /// The hostile entity
    pub const fn hostile(&self) -> &Hostile {
        &self.hostile
    }

    /// Cell the player returns to after an abort
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Running totals
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Run one tick with the given directional intent
    pub fn tick(&mut self, intent: Option<Direction>) -> TickReport {
        self.stats.ticks += 1;

        let step = self
            .tracker
            .step(&mut self.field, intent, self.hostile.position());
        if let StepOutcome::Closed { resolution, .. } = &step {
            match resolution {
                Resolution::Claimed { .. } => self.stats.claims += 1,
                Resolution::Unresolved => self.stats.unresolved += 1,
            }
        }

        let hostile = self
            .hostile
            .advance(&self.field, &self.tracker.live_trail());

        let aborted = collision::monitor(&mut self.tracker, self.hostile.position(), self.start);
        if aborted {
            self.stats.aborts += 1;
        }

        TickReport {
            tick: self.stats.ticks,
            step,
            hostile,
            aborted,
        }
    }

    /// Snapshot for rendering the current tick
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            unclaimed: self.field.unclaimed_mask(),
            trail: self.tracker.live_trail(),
            player: self.tracker.position(),
            hostile: self.hostile.position(),
        }
    }

    /// Log a one-line summary of the session so far
    pub fn log_summary(&self) {
        info!(
            "{} ticks: {} claims, {} unresolved closures, {} aborts, {:.1}% claimed",
            self.stats.ticks,
            self.stats.claims,
            self.stats.unresolved,
            self.stats.aborts,
            self.field.claimed_fraction() * 100.0
        );
    }
}
