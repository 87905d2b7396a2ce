//! Cosmetic progress indicator.
//!
//! The value is not tied to bytes on the wire: it climbs by
//! [`PROGRESS_STEP`] per tick, stalls at [`PROGRESS_CEILING`], and only
//! reaches 100 once the backend has answered.

use crate::{PROGRESS_CEILING, PROGRESS_STEP};

/// Percentage shown by the progress bar, always within `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Progress(u8);

impl Progress {
    pub const ZERO: Progress = Progress(0);
    pub const COMPLETE: Progress = Progress(100);

    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Advance by one step, never past the ceiling.
    ///
    /// Returns `true` while further ticks can still move the bar.
    pub fn tick(&mut self) -> bool {
        if self.0 < PROGRESS_CEILING {
            self.0 = self.0.saturating_add(PROGRESS_STEP).min(PROGRESS_CEILING);
        }
        self.0 < PROGRESS_CEILING
    }

    pub fn complete(&mut self) {
        *self = Self::COMPLETE;
    }

    pub fn reset(&mut self) {
        *self = Self::ZERO;
    }

    /// Inline style for the fill element.
    pub fn css_width(&self) -> String {
        format!("width: {}%;", self.0)
    }
}
