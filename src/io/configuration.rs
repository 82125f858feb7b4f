//! Engine constants and runtime configuration defaults

// Field defaults match the classic 800x600 playfield with a one-cell border
/// Default field width in cells
pub const DEFAULT_WIDTH: usize = 800;
/// Default field height in cells
pub const DEFAULT_HEIGHT: usize = 600;
/// Default width of the initially claimed border ring
pub const DEFAULT_BORDER_WIDTH: usize = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed field dimension
pub const MAX_FIELD_DIMENSION: usize = 10_000;

/// Cells the hostile advances per tick
pub const DEFAULT_HOSTILE_SPEED: i32 = 2;

/// Target tick rate of the session loop
pub const TICK_RATE_HZ: u32 = 60;

/// Fixed seed for reproducible sessions
pub const DEFAULT_SEED: u64 = 42;

/// Default number of ticks simulated by the CLI
pub const DEFAULT_MAX_TICKS: u64 = 3600;

// Autopilot holds each random direction for a number of ticks in this range
/// Shortest autopilot hold in ticks
pub const AUTOPILOT_MIN_HOLD: usize = 4;
/// Longest autopilot hold in ticks
pub const AUTOPILOT_MAX_HOLD: usize = 80;

// Output settings
/// Default path of the final field snapshot
pub const DEFAULT_OUTPUT_PATH: &str = "qixfield_result.png";
/// Ticks between captured replay frames
pub const DEFAULT_FRAME_INTERVAL: u64 = 10;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the final frame's delay so the result stays visible
pub const FINAL_FRAME_HOLD: u32 = 25;

// Render palette
/// Colour of unclaimed cells
pub const UNCLAIMED_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Colour of claimed cells
pub const CLAIMED_COLOR: [u8; 4] = [0, 0, 255, 255];
/// Colour of the in-progress trail
pub const TRAIL_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Colour of the player marker
pub const PLAYER_COLOR: [u8; 4] = [255, 0, 0, 255];
/// Colour of the hostile marker
pub const HOSTILE_COLOR: [u8; 4] = [0, 255, 0, 255];
/// Radius of the player and hostile markers in cells
pub const MARKER_RADIUS: i32 = 2;

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
