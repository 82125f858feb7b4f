//! Directional intent sources for the tick loop
//!
//! At most one axis-aligned intent is produced per tick. Held keys resolve
//! with a fixed precedence of left, right, up, down. Headless runs read
//! intents from a script or from a seeded autopilot.

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;

use crate::io::configuration::{AUTOPILOT_MAX_HOLD, AUTOPILOT_MIN_HOLD};
use crate::io::error::{Result, invalid_script};
use crate::spatial::Direction;

/// Directional keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Up arrow held
    pub up: bool,
    /// Down arrow held
    pub down: bool,
}

impl HeldKeys {
    /// The single intent for this tick; first match wins
    pub const fn intent(self) -> Option<Direction> {
        if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

/// Scripted intents, each held for a number of ticks
///
/// Tokens are `<L|R|U|D|.><count>` separated by whitespace, where `.` means
/// no input. `R12 D4 .30` moves right twelve ticks, down four, then idles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputScript {
    steps: VecDeque<(Option<Direction>, usize)>,
}

impl InputScript {
    /// Parse a script
    ///
    /// # Errors
    ///
    /// Returns an error if a token has an unknown direction letter or a
    /// missing, malformed or zero count
    pub fn parse(script: &str) -> Result<Self> {
        let mut steps = VecDeque::new();

        for (position, token) in script.split_whitespace().enumerate() {
            let mut chars = token.chars();
            let intent = match chars.next() {
                Some('L' | 'l') => Some(Direction::Left),
                Some('R' | 'r') => Some(Direction::Right),
                Some('U' | 'u') => Some(Direction::Up),
                Some('D' | 'd') => Some(Direction::Down),
                Some('.') => None,
                _ => {
                    return Err(invalid_script(
                        token,
                        position,
                        &"expected one of L, R, U, D or '.'",
                    ));
                }
            };

            let count: usize = chars.as_str().parse().map_err(|_parse_error| {
                invalid_script(token, position, &"expected a tick count after the direction")
            })?;
            if count == 0 {
                return Err(invalid_script(token, position, &"tick count must be positive"));
            }

            steps.push_back((intent, count));
        }

        Ok(Self { steps })
    }

    /// Total ticks the script covers
    pub fn total_ticks(&self) -> usize {
        self.steps.iter().map(|(_, count)| count).sum()
    }

    /// Whether every scripted tick has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.steps.is_empty()
    }

    /// Intent for the next tick; `None` once exhausted
    pub fn next_intent(&mut self) -> Option<Direction> {
        let (intent, remaining) = self.steps.front_mut()?;
        let intent = *intent;
        *remaining -= 1;
        if *remaining == 0 {
            self.steps.pop_front();
        }
        intent
    }
}

/// Seeded random input for unattended sessions
///
/// Holds a random direction for a random number of ticks, never picking the
/// exact reverse of the previous direction.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: StdRng,
    direction: Direction,
    remaining: usize,
}

impl Autopilot {
    /// Create an autopilot from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            direction: Direction::Down,
            remaining: 0,
        }
    }

    /// Intent for the next tick
    pub fn next_intent(&mut self) -> Option<Direction> {
        if self.remaining == 0 {
            let reverse = self.direction.opposite();
            let choices: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|&direction| direction != reverse)
                .collect();
            let index = self.rng.random_range(0..choices.len());
            self.direction = choices.get(index).copied().unwrap_or(self.direction);
            self.remaining = self
                .rng
                .random_range(AUTOPILOT_MIN_HOLD..=AUTOPILOT_MAX_HOLD);
        }

        self.remaining -= 1;
        Some(self.direction)
    }
}

/// Where a headless session gets its intents from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Fixed script; yields no input once exhausted
    Script(InputScript),
    /// Seeded random wandering
    Autopilot(Autopilot),
}

impl InputSource {
    /// Intent for the next tick
    pub fn next_intent(&mut self) -> Option<Direction> {
        match self {
            Self::Script(script) => script.next_intent(),
            Self::Autopilot(autopilot) => autopilot.next_intent(),
        }
    }
}
