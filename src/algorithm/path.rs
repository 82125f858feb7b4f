//! Player state machine and drawn path tracking
//!
//! The tracker is either idle, walking the boundary, or drawing a path through
//! unclaimed space. A path records only the cells where the travel direction
//! changed; the player's current position is the live head of the trailing
//! segment. Stepping back onto the boundary closes the path and hands it to
//! the region resolver.

use log::debug;

use crate::algorithm::resolver::{self, Resolution};
use crate::spatial::adjacency::is_boundary;
use crate::spatial::{Direction, Field, Position};

/// Ordered vertices of a drawn path
///
/// Consecutive vertices differ along one axis only and the first vertex is
/// always a boundary cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<Position>,
}

impl Path {
    /// Build a path from explicit vertices
    pub const fn from_vertices(vertices: Vec<Position>) -> Self {
        Self { vertices }
    }

    /// Committed vertices in drawing order
    pub fn vertices(&self) -> &[Position] {
        &self.vertices
    }

    /// Number of committed vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether no vertex has been committed
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices followed by the live head, the polyline currently on screen
    pub fn with_head(&self, head: Position) -> Vec<Position> {
        let mut polyline = Vec::with_capacity(self.vertices.len() + 1);
        polyline.extend_from_slice(&self.vertices);
        polyline.push(head);
        polyline
    }

    fn push(&mut self, vertex: Position) {
        self.vertices.push(vertex);
    }
}

/// Player position, drawing flag and facing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    /// Current cell
    pub position: Position,
    /// Whether a path is being drawn
    pub drawing: bool,
    /// Direction of the segment being drawn, `None` while idle
    pub direction: Option<Direction>,
}

/// Result of feeding one directional intent to the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// No directional input this tick
    NoInput,
    /// Target cell was out of bounds or not enterable; nothing changed
    Ignored,
    /// Idle move along the boundary
    Walked,
    /// Left the boundary and began a new path
    StartedDrawing,
    /// Advanced the open path by one cell
    Extended,
    /// Returned to the boundary; the closed path was resolved
    Closed {
        /// The completed path including its closing vertex
        path: Path,
        /// What the resolver annexed
        resolution: Resolution,
    },
}

/// Two-state machine driving the player and its path
#[derive(Debug, Clone)]
pub struct PathTracker {
    player: PlayerState,
    path: Path,
}

impl PathTracker {
    /// Create an idle tracker with the player at `start`
    pub fn new(start: Position) -> Self {
        Self {
            player: PlayerState {
                position: start,
                drawing: false,
                direction: None,
            },
            path: Path::default(),
        }
    }

    /// Current player state
    pub const fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Player position
    pub const fn position(&self) -> Position {
        self.player.position
    }

    /// Whether a path is being drawn
    pub const fn is_drawing(&self) -> bool {
        self.player.drawing
    }

    /// Committed vertices of the open path, empty while idle
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Committed vertices plus the player position while drawing
    ///
    /// Empty while idle.
    pub fn live_trail(&self) -> Vec<Position> {
        if self.player.drawing {
            self.path.with_head(self.player.position)
        } else {
            Vec::new()
        }
    }

    /// Apply one directional intent
    ///
    /// Closing a path resolves it against `field` immediately, with
    /// `hostile` as the hostile's current cell, before this returns.
    pub fn step(
        &mut self,
        field: &mut Field,
        intent: Option<Direction>,
        hostile: Position,
    ) -> StepOutcome {
        let Some(direction) = intent else {
            return StepOutcome::NoInput;
        };

        let target = direction.offset(self.player.position, 1);
        if !field.in_bounds(target) {
            return StepOutcome::Ignored;
        }

        if self.player.drawing {
            self.advance_drawing(field, direction, target, hostile)
        } else {
            self.advance_idle(field, direction, target)
        }
    }

    fn advance_idle(&mut self, field: &Field, direction: Direction, target: Position) -> StepOutcome {
        if is_boundary(field, target) {
            self.player.position = target;
            return StepOutcome::Walked;
        }

        // Every non-boundary in-bounds cell is unclaimed and away from claimed land
        self.path = Path::from_vertices(vec![self.player.position]);
        self.player.drawing = true;
        self.player.direction = Some(direction);
        self.player.position = target;
        debug!(
            "Started drawing at {:?} heading {direction:?}",
            self.path.vertices()
        );
        StepOutcome::StartedDrawing
    }

    fn advance_drawing(
        &mut self,
        field: &mut Field,
        direction: Direction,
        target: Position,
        hostile: Position,
    ) -> StepOutcome {
        if !field.is_unclaimed(target) {
            return StepOutcome::Ignored;
        }

        if self.player.direction != Some(direction) {
            self.path.push(self.player.position);
            self.player.direction = Some(direction);
        }
        self.player.position = target;

        if !is_boundary(field, target) {
            return StepOutcome::Extended;
        }

        self.path.push(target);
        let path = std::mem::take(&mut self.path);
        let resolution = resolver::resolve(&path, field, hostile);
        self.player.drawing = false;
        self.player.direction = None;

        StepOutcome::Closed { path, resolution }
    }

    /// Drop the open path and return the player to `reset_to`, idle
    pub fn abort(&mut self, reset_to: Position) {
        self.path = Path::default();
        self.player = PlayerState {
            position: reset_to,
            drawing: false,
            direction: None,
        };
    }
}
