//! Wipe effects: progressive fill from the controller end
//!
//! A wipe paints one more pixel per eligible tick until the fill reaches
//! the end of the strip. Pixels past the cursor are not retransmitted
//! and keep their latched color, so a wipe overrides whatever frame was
//! showing before it, pixel by pixel.

use embassy_time::{Duration, Instant};

use crate::StripDriver;
use crate::color::{RED, Rgb, advance_hue};
use crate::strip::Strip;

/// Progressive single-color fill wipe
#[derive(Debug, Clone)]
pub struct Wipe {
    cursor: u16,
    last_step: Instant,
}

impl Wipe {
    pub const fn new() -> Self {
        Self {
            cursor: 0,
            last_step: Instant::from_millis(0),
        }
    }

    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// Step the wipe; true exactly once per completed pass
    ///
    /// The completing call rewinds the cursor without consuming a delay
    /// slot, so a follow-up wipe starts immediately.
    pub fn tick<D: StripDriver>(
        &mut self,
        strip: &mut Strip<D>,
        color: Rgb,
        delay: Duration,
        now: Instant,
    ) -> bool {
        if self.cursor == strip.len() {
            self.cursor = 0;
            return true;
        }

        if now.duration_since(self.last_step) < delay {
            return false;
        }

        strip.apply_leading(color, self.cursor + 1);
        self.cursor += 1;
        self.last_step = now;

        false
    }
}

impl Default for Wipe {
    fn default() -> Self {
        Self::new()
    }
}

/// Wipe through a caller-provided color list
///
/// The list index advances after each completed pass.
#[derive(Debug, Clone, Default)]
pub struct WipeArray {
    wipe: Wipe,
    index: usize,
}

impl WipeArray {
    pub const fn new() -> Self {
        Self {
            wipe: Wipe::new(),
            index: 0,
        }
    }

    pub fn restart(&mut self) {
        self.wipe.restart();
        self.index = 0;
    }

    pub fn tick<D: StripDriver>(
        &mut self,
        strip: &mut Strip<D>,
        colors: &[Rgb],
        delay: Duration,
        now: Instant,
    ) {
        let Some(&color) = colors.get(self.index) else {
            self.index = 0;
            return;
        };

        if self.wipe.tick(strip, color, delay, now) {
            self.index = (self.index + 1) % colors.len();
        }
    }
}

/// Wipe along the hue wheel, one notch per pass
#[derive(Debug, Clone)]
pub struct WipeRainbow {
    wipe: Wipe,
    color: Rgb,
}

impl WipeRainbow {
    pub const fn new() -> Self {
        Self {
            wipe: Wipe::new(),
            color: RED,
        }
    }

    pub fn restart(&mut self) {
        self.wipe.restart();
        self.color = RED;
    }

    pub fn tick<D: StripDriver>(
        &mut self,
        strip: &mut Strip<D>,
        delay: Duration,
        step_size: u8,
        now: Instant,
    ) {
        if self.wipe.tick(strip, self.color, delay, now) {
            advance_hue(&mut self.color, step_size);
        }
    }
}

impl Default for WipeRainbow {
    fn default() -> Self {
        Self::new()
    }
}
