#![no_std]

pub mod calibrate;
pub mod color;
pub mod effect;
pub mod pixel;
pub mod segment;
pub mod strip;

mod rng;

pub use calibrate::{CalibrationConfig, Calibrator, Clock, ControlInput, SizeStore};
pub use color::{Rgb, advance_hue, apply_brightness, scaled, wheel};
pub use effect::{
    Breathe, BreatheArray, BreatheRainbow, BreatheRandom, BrightnessWave, Fade, Rain, Rainbow,
    RotateRainbow, Wipe, WipeArray, WipeRainbow, scroll,
};
pub use pixel::{Pixel, PixelBuffer};
pub use segment::{Segment, SegmentBuffer};
pub use strip::{ChannelOrder, PwmStrip, Strip, StripConfig};

pub use embassy_time::{Duration, Instant};

/// A fixed-capacity buffer ran out of room.
///
/// Returned instead of growing silently; the caller decides whether to
/// drop the element or treat it as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapacityError;

impl core::fmt::Display for CapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "buffer capacity exceeded")
    }
}

/// Abstract byte-level driver for an addressable LED strip
///
/// Implement this trait for the transmission peripheral (bit-banged GPIO,
/// SPI, RMT, PIO, ...). The engine brackets every frame with exactly one
/// `begin`/`end` pair and sends three bytes per pixel in between, in the
/// wiring order configured on the [`Strip`]. Timing between `send` calls is
/// protocol-critical and entirely the implementation's concern.
pub trait StripDriver {
    /// Prepare the peripheral for a frame of pixel data
    fn begin(&mut self);

    /// Transmit a single byte
    fn send(&mut self, byte: u8);

    /// Latch the frame
    fn end(&mut self);
}

/// Anything that can show a single solid color
///
/// Implemented by the addressable [`Strip`] and the non-addressable
/// [`PwmStrip`], so the solid-color engines (fade, breathe, rainbow,
/// scroll) run on either backend.
pub trait SolidOutput {
    /// Apply one color across the whole output
    fn apply_all(&mut self, color: Rgb);
}
