/// Command-line interface and session runner
pub mod cli;
/// Engine constants and runtime configuration defaults
pub mod configuration;
/// Error types for fallible operations
pub mod error;
/// Frame rendering and PNG export
pub mod image;
/// Directional intent sources
pub mod input;
/// Tick progress display
pub mod progress;
/// Fixed-rate tick pacing
pub mod timing;
/// Session replay capture and GIF export
pub mod visualization;
