//! Tick progress display for headless sessions

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};

/// Single progress bar over the ticks of one session
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar for a session of `total_ticks` ticks
    pub fn new(total_ticks: u64) -> Self {
        let bar = ProgressBar::new(total_ticks);
        bar.set_style(Self::tick_style());
        Self { bar }
    }

    fn tick_style() -> ProgressStyle {
        let template =
            format!("[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }

    /// Report the current tick and claimed percentage
    pub fn update(&self, tick: u64, claimed_fraction: f64) {
        self.bar.set_position(tick);
        self.bar
            .set_message(format!("{:.1}% claimed", claimed_fraction * 100.0));
    }

    /// Current bar position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
