//! Brightness fade: the triangle wave and the time-gated strip engine

use embassy_time::{Duration, Instant};

use crate::SolidOutput;
use crate::color::{Rgb, scaled};

/// Linear triangle wave over brightness 0..=255
///
/// The direction flips at the bounds; [`advance`](Self::advance) reports
/// completion exactly when the level has come back down to zero, i.e.
/// after one full up-down cycle.
#[derive(Debug, Clone)]
pub struct BrightnessWave {
    level: u8,
    rising: bool,
}

impl BrightnessWave {
    pub const fn new() -> Self {
        Self {
            level: 0,
            rising: true,
        }
    }

    /// Reset to ascending-from-zero
    pub fn restart(&mut self) {
        self.level = 0;
        self.rising = true;
    }

    /// Current brightness level
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Advance the wave by `step` and report cycle completion
    pub fn advance(&mut self, step: u8) -> bool {
        if self.rising {
            self.level = self.level.saturating_add(step);
            self.rising = self.level < 255;
        } else {
            self.level = self.level.saturating_sub(step);
            self.rising = self.level == 0;
        }
        self.level == 0
    }
}

impl Default for BrightnessWave {
    fn default() -> Self {
        Self::new()
    }
}

/// Time-gated whole-strip brightness fade
///
/// Each eligible tick advances the wave one step and projects the color
/// scaled to the new level; calls before `delay` has elapsed return
/// without touching the output.
#[derive(Debug, Clone)]
pub struct Fade {
    wave: BrightnessWave,
    last_step: Instant,
}

impl Fade {
    pub const fn new() -> Self {
        Self {
            wave: BrightnessWave::new(),
            last_step: Instant::from_millis(0),
        }
    }

    /// Reset the wave to ascending-from-zero
    pub fn restart(&mut self) {
        self.wave.restart();
    }

    pub(crate) const fn last_step(&self) -> Instant {
        self.last_step
    }

    /// Step the fade once `delay` has elapsed
    ///
    /// Returns true exactly when a full fade cycle completes.
    pub fn tick<S: SolidOutput>(
        &mut self,
        out: &mut S,
        color: Rgb,
        delay: Duration,
        step_size: u8,
        now: Instant,
    ) -> bool {
        if now.duration_since(self.last_step) <= delay {
            return false;
        }

        let done = self.wave.advance(step_size);
        out.apply_all(scaled(color, self.wave.level()));
        self.last_step = now;

        done
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::new()
    }
}
