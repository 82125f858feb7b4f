//! Command-line interface for running headless sessions

use crate::algorithm::session::{Session, SessionConfig, SessionStats};
use crate::io::configuration::{
    DEFAULT_BORDER_WIDTH, DEFAULT_FRAME_INTERVAL, DEFAULT_HEIGHT, DEFAULT_HOSTILE_SPEED,
    DEFAULT_MAX_TICKS, DEFAULT_OUTPUT_PATH, DEFAULT_SEED, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
    TICK_RATE_HZ,
};
use crate::io::error::{QixError, Result};
use crate::io::image::export_png;
use crate::io::input::{Autopilot, InputScript, InputSource};
use crate::io::progress::ProgressManager;
use crate::io::timing::TickClock;
use crate::io::visualization::VisualizationCapture;
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qixfield")]
#[command(
    author,
    version,
    about = "Run a territory-claiming session and export the resulting field"
)]
/// Command-line arguments for a headless session
pub struct Cli {
    /// Field width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Field height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Width of the initially claimed border
    #[arg(short, long, default_value_t = DEFAULT_BORDER_WIDTH)]
    pub border: usize,

    /// Random seed for the hostile and the autopilot
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum ticks to simulate
    #[arg(short, long, default_value_t = DEFAULT_MAX_TICKS)]
    pub ticks: u64,

    /// Cells the hostile advances per tick
    #[arg(long, default_value_t = DEFAULT_HOSTILE_SPEED)]
    pub hostile_speed: i32,

    /// Input script such as "R40 D120 L10"; autopilot is used when absent
    #[arg(long, conflicts_with = "script_file")]
    pub script: Option<String>,

    /// File containing an input script
    #[arg(long)]
    pub script_file: Option<PathBuf>,

    /// Path of the final field snapshot
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Write an animated GIF replay to this path
    #[arg(short, long, value_name = "GIF")]
    pub visualize: Option<PathBuf>,

    /// Ticks between replay frames
    #[arg(long, default_value_t = DEFAULT_FRAME_INTERVAL)]
    pub frame_interval: u64,

    /// Pace ticks at the real-time rate instead of running flat out
    #[arg(short, long)]
    pub realtime: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Session parameters selected on the command line
    pub const fn session_config(&self) -> SessionConfig {
        SessionConfig {
            width: self.width,
            height: self.height,
            border_width: self.border,
            hostile_speed: self.hostile_speed,
            player_start: None,
            hostile_start: None,
        }
    }

    /// Build the intent source from the script options
    ///
    /// # Errors
    ///
    /// Returns an error if the script file cannot be read or the script does
    /// not parse
    pub fn input_source(&self) -> Result<InputSource> {
        if let Some(script) = &self.script {
            return InputScript::parse(script).map(InputSource::Script);
        }

        if let Some(path) = &self.script_file {
            let script = std::fs::read_to_string(path).map_err(|e| QixError::FileSystem {
                path: path.clone(),
                operation: "read script",
                source: e,
            })?;
            return InputScript::parse(&script).map(InputSource::Script);
        }

        Ok(InputSource::Autopilot(Autopilot::new(self.seed)))
    }
}

/// Drives one session from the CLI options to exported images
pub struct SessionRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SessionRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.ticks));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the session, then export the snapshot and optional replay
    ///
    /// # Errors
    ///
    /// Returns an error if session parameters are invalid, the input script
    /// cannot be loaded, or an export fails
    pub fn run(&mut self) -> Result<SessionStats> {
        let mut session = Session::new(self.cli.session_config(), self.cli.seed)?;
        let mut input = self.cli.input_source()?;
        let mut clock = self.cli.realtime.then(|| TickClock::new(TICK_RATE_HZ));
        let mut capture = self.cli.visualize.as_ref().map(|_| {
            VisualizationCapture::new(
                session.field().unclaimed_mask().clone(),
                self.cli.frame_interval,
            )
        });

        info!(
            "Session {}x{} (border {}), seed {}, up to {} ticks",
            self.cli.width, self.cli.height, self.cli.border, self.cli.seed, self.cli.ticks
        );

        for _ in 0..self.cli.ticks {
            if matches!(&input, InputSource::Script(script) if script.is_exhausted()) {
                break;
            }

            let report = session.tick(input.next_intent());

            if let Some(ref mut capture) = capture {
                capture.observe(&report, &session.view());
            }
            if let Some(ref pm) = self.progress_manager {
                pm.update(report.tick, session.field().claimed_fraction());
            }
            if let Some(ref mut clock) = clock {
                clock.wait();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        session.log_summary();

        export_png(&session.view(), &self.cli.output)?;
        info!("Field snapshot written to {}", self.cli.output.display());

        if let (Some(capture), Some(path)) = (capture.as_mut(), &self.cli.visualize) {
            capture.finish(session.stats().ticks, &session.view());
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
            info!(
                "Replay of {} frames written to {}",
                capture.frame_count(),
                path.display()
            );
        }

        Ok(session.stats())
    }
}
