//! Frame rendering and PNG export of session snapshots

use crate::algorithm::session::FrameView;
use crate::io::configuration::{
    CLAIMED_COLOR, HOSTILE_COLOR, MARKER_RADIUS, PLAYER_COLOR, TRAIL_COLOR, UNCLAIMED_COLOR,
};
use crate::io::error::{QixError, Result};
use crate::spatial::Position;
use crate::spatial::raster::trace_polyline;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Draw a snapshot: territory, trail, then player and hostile markers
///
/// One pixel per cell.
pub fn render_frame(view: &FrameView<'_>) -> RgbaImage {
    let width = view.unclaimed.width() as u32;
    let height = view.unclaimed.height() as u32;

    let mut img = RgbaImage::from_fn(width, height, |x, y| {
        if view.unclaimed.get([x as i32, y as i32]) {
            Rgba(UNCLAIMED_COLOR)
        } else {
            Rgba(CLAIMED_COLOR)
        }
    });

    for cell in trace_polyline(&view.trail) {
        put_cell(&mut img, cell, TRAIL_COLOR);
    }

    draw_marker(&mut img, view.player, PLAYER_COLOR);
    draw_marker(&mut img, view.hostile, HOSTILE_COLOR);

    img
}

fn put_cell(img: &mut RgbaImage, cell: Position, color: [u8; 4]) {
    let (Ok(x), Ok(y)) = (u32::try_from(cell[0]), u32::try_from(cell[1])) else {
        return;
    };
    if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
        *pixel = Rgba(color);
    }
}

// Filled disc clipped to the image
fn draw_marker(img: &mut RgbaImage, center: Position, color: [u8; 4]) {
    let r2 = MARKER_RADIUS * MARKER_RADIUS;
    for dy in -MARKER_RADIUS..=MARKER_RADIUS {
        for dx in -MARKER_RADIUS..=MARKER_RADIUS {
            if dx * dx + dy * dy <= r2 {
                put_cell(img, [center[0] + dx, center[1] + dy], color);
            }
        }
    }
}

/// Render a snapshot and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(view: &FrameView<'_>, output_path: &Path) -> Result<()> {
    let img = render_frame(view);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| QixError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| QixError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
