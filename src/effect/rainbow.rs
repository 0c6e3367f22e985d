//! Whole-strip rainbow effects
//!
//! Both engines walk the discrete hue wheel. [`Rainbow`] shows one wheel
//! position across the whole strip; [`RotateRainbow`] spreads the wheel
//! along the strip and shifts it each step, producing a traveling
//! gradient.

use embassy_time::{Duration, Instant};

use crate::color::{RED, Rgb, advance_hue, scaled};
use crate::strip::Strip;
use crate::{SolidOutput, StripDriver};

/// Fade the whole strip through the hue wheel
#[derive(Debug, Clone)]
pub struct Rainbow {
    color: Rgb,
    last_step: Instant,
}

impl Rainbow {
    pub const fn new() -> Self {
        Self {
            color: RED,
            last_step: Instant::from_millis(0),
        }
    }

    pub fn restart(&mut self) {
        self.color = RED;
    }

    /// Advance the wheel once `delay` has elapsed and project it
    ///
    /// Brightness is applied to a copy; the stored wheel position stays
    /// unscaled so the walk never degrades.
    pub fn tick<S: SolidOutput>(
        &mut self,
        out: &mut S,
        step_size: u8,
        delay: Duration,
        brightness: u8,
        now: Instant,
    ) {
        if now.duration_since(self.last_step) < delay {
            return;
        }

        advance_hue(&mut self.color, step_size);

        if brightness < 255 {
            out.apply_all(scaled(self.color, brightness));
        } else {
            out.apply_all(self.color);
        }

        self.last_step = now;
    }
}

impl Default for Rainbow {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotate the hue wheel along the strip
///
/// Pixel `i` shows the wheel position `i` steps ahead of the stored
/// color, and the stored color advances once per eligible tick, so the
/// gradient travels without any per-pixel delay.
#[derive(Debug, Clone)]
pub struct RotateRainbow {
    color: Rgb,
    last_step: Instant,
}

impl RotateRainbow {
    pub const fn new() -> Self {
        Self {
            color: RED,
            last_step: Instant::from_millis(0),
        }
    }

    pub fn restart(&mut self) {
        self.color = RED;
    }

    pub fn tick<D: StripDriver>(
        &mut self,
        strip: &mut Strip<D>,
        step_size: u8,
        delay: Duration,
        now: Instant,
    ) {
        if now.duration_since(self.last_step) < delay {
            return;
        }

        advance_hue(&mut self.color, step_size);

        let mut cursor = self.color;
        strip.apply_fn(|_| {
            let color = cursor;
            advance_hue(&mut cursor, step_size);
            color
        });

        self.last_step = now;
    }
}

impl Default for RotateRainbow {
    fn default() -> Self {
        Self::new()
    }
}
