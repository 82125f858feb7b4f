//! Collision monitor ending path attempts the hostile touches

use log::warn;

use crate::algorithm::path::PathTracker;
use crate::spatial::Position;
use crate::spatial::raster::polyline_contains;

/// Whether the hostile's cell lies on the live trail polyline
pub fn hostile_touches_trail(trail: &[Position], hostile: Position) -> bool {
    polyline_contains(trail, hostile)
}

/// Abort the open path if the hostile is on it
///
/// Only acts while drawing. On contact the player returns to `start`, the
/// tracker goes idle and the path is discarded; the field is not touched.
/// Returns whether an abort happened.
pub fn monitor(tracker: &mut PathTracker, hostile: Position, start: Position) -> bool {
    if !tracker.is_drawing() {
        return false;
    }

    if !hostile_touches_trail(&tracker.live_trail(), hostile) {
        return false;
    }

    warn!(
        "Hostile hit the trail at {hostile:?}; path of {} vertices aborted",
        tracker.path().len()
    );
    tracker.abort(start);
    true
}
