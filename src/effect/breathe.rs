//! Breathe effects: fade cycles separated by a dwell pause

use embassy_time::{Duration, Instant};

use crate::SolidOutput;
use crate::color::{OFF, RED, Rgb, WHITE, advance_hue};
use crate::effect::fade::Fade;
use crate::rng::Rng;

/// Pause held between two breath cycles
const REST: Duration = Duration::from_millis(2000);

/// One full brightness cycle, a rest, repeat
#[derive(Debug, Clone)]
pub struct Breathe {
    fade: Fade,
    resting: bool,
}

impl Breathe {
    pub const fn new() -> Self {
        Self {
            fade: Fade::new(),
            resting: false,
        }
    }

    pub fn restart(&mut self) {
        self.fade.restart();
        self.resting = false;
    }

    /// Step the breath; true exactly when a cycle completes
    pub fn tick<S: SolidOutput>(
        &mut self,
        out: &mut S,
        color: Rgb,
        delay: Duration,
        step_size: u8,
        now: Instant,
    ) -> bool {
        if self.resting {
            if now.duration_since(self.fade.last_step()) < REST {
                return false;
            }
            self.resting = false;
        }

        self.resting = self.fade.tick(out, color, delay, step_size, now);
        self.resting
    }
}

impl Default for Breathe {
    fn default() -> Self {
        Self::new()
    }
}

/// Breathe through a caller-provided color list
///
/// The list index advances after each completed cycle.
#[derive(Debug, Clone, Default)]
pub struct BreatheArray {
    breathe: Breathe,
    index: usize,
}

impl BreatheArray {
    pub const fn new() -> Self {
        Self {
            breathe: Breathe::new(),
            index: 0,
        }
    }

    pub fn restart(&mut self) {
        self.breathe.restart();
        self.index = 0;
    }

    pub fn tick<S: SolidOutput>(
        &mut self,
        out: &mut S,
        colors: &[Rgb],
        delay: Duration,
        step_size: u8,
        now: Instant,
    ) {
        // Also covers a list that shrank between calls
        let Some(&color) = colors.get(self.index) else {
            self.index = 0;
            return;
        };

        if self.breathe.tick(out, color, delay, step_size, now) {
            self.index = (self.index + 1) % colors.len();
        }
    }
}

/// Breathe a freshly random color after every cycle
#[derive(Debug)]
pub struct BreatheRandom {
    breathe: Breathe,
    color: Rgb,
    rng: Rng,
}

impl BreatheRandom {
    pub const fn new(seed: u32) -> Self {
        Self {
            breathe: Breathe::new(),
            color: WHITE,
            rng: Rng::new(seed),
        }
    }

    pub fn tick<S: SolidOutput>(
        &mut self,
        out: &mut S,
        delay: Duration,
        step_size: u8,
        now: Instant,
    ) {
        // A rolled all-black would breathe invisibly; promote it
        if self.color == OFF {
            self.color = WHITE;
        }

        if self.breathe.tick(out, self.color, delay, step_size, now) {
            self.color = Rgb {
                r: self.rng.channel(),
                g: self.rng.channel(),
                b: self.rng.channel(),
            };
        }
    }
}

/// Breathe along the hue wheel, one notch per cycle
#[derive(Debug, Clone)]
pub struct BreatheRainbow {
    breathe: Breathe,
    color: Rgb,
}

impl BreatheRainbow {
    pub const fn new() -> Self {
        Self {
            breathe: Breathe::new(),
            color: RED,
        }
    }

    pub fn restart(&mut self) {
        self.breathe.restart();
        self.color = RED;
    }

    pub fn tick<S: SolidOutput>(
        &mut self,
        out: &mut S,
        delay: Duration,
        breath_step_size: u8,
        hue_step_size: u8,
        now: Instant,
    ) {
        if self.breathe.tick(out, self.color, delay, breath_step_size, now) {
            advance_hue(&mut self.color, hue_step_size);
        }
    }
}

impl Default for BreatheRainbow {
    fn default() -> Self {
        Self::new()
    }
}
