//! Strip projection
//!
//! Converts an in-memory color description (solid color, segment
//! composition, dense frame, sparse overlay) into the ordered byte
//! stream the [`StripDriver`] puts on the wire: one `begin`/`end` pair
//! per frame, three bytes per pixel in the configured channel order.
//!
//! Every projection is bounded by the physical strip length and covers
//! it completely, padding with black where a description falls short.

use embedded_hal::pwm::SetDutyCycle;

use crate::color::{OFF, Rgb};
use crate::pixel::PixelBuffer;
use crate::segment::{Segment, SegmentBuffer};
use crate::{SolidOutput, StripDriver};

/// Order in which a pixel's three channels go onto the wire
///
/// Fixed by the strip hardware; configured once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelOrder {
    Rgb,
    /// The common WS2812 wiring
    #[default]
    Grb,
    Brg,
    Bgr,
}

impl ChannelOrder {
    /// Arrange a color's channels in wire order
    pub const fn wire_bytes(self, color: Rgb) -> [u8; 3] {
        match self {
            Self::Rgb => [color.r, color.g, color.b],
            Self::Grb => [color.g, color.r, color.b],
            Self::Brg => [color.b, color.r, color.g],
            Self::Bgr => [color.b, color.g, color.r],
        }
    }
}

/// Construction-time configuration of an addressable strip
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripConfig {
    /// Channel wiring order of the strip hardware
    pub order: ChannelOrder,
    /// Physical strip length in pixels, typically loaded from a
    /// [`SizeStore`](crate::calibrate::SizeStore) or fixed at build time
    pub len: u16,
}

/// Addressable LED strip projector
///
/// Owns the transmission driver. All `apply_*` entry points emit exactly
/// one frame.
pub struct Strip<D: StripDriver> {
    driver: D,
    order: ChannelOrder,
    len: u16,
}

impl<D: StripDriver> Strip<D> {
    pub fn new(driver: D, config: StripConfig) -> Self {
        Self {
            driver,
            order: config.order,
            len: config.len,
        }
    }

    /// Physical strip length in pixels
    pub const fn len(&self) -> u16 {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Change the physical strip length
    ///
    /// Normally only the calibration procedure does this.
    pub fn set_len(&mut self, len: u16) {
        self.len = len;
    }

    /// Give the driver back, consuming the strip
    pub fn release(self) -> D {
        self.driver
    }

    fn send_pixel(&mut self, color: Rgb) {
        for byte in self.order.wire_bytes(color) {
            self.driver.send(byte);
        }
    }

    /// Project a segment composition
    ///
    /// Segments paint in order; runs past the physical strip length are
    /// clipped, and a composition that falls short is padded with black.
    pub fn apply_segments<const N: usize>(&mut self, buf: &SegmentBuffer<N>) {
        let len = self.len;
        self.driver.begin();
        let mut sent: u16 = 0;
        'segments: for segment in buf.iter() {
            for _ in 0..segment.length {
                if sent == len {
                    break 'segments;
                }
                self.send_pixel(segment.color);
                sent += 1;
            }
        }
        while sent < len {
            self.send_pixel(OFF);
            sent += 1;
        }
        self.driver.end();
    }

    /// Project a dense per-pixel frame
    ///
    /// The first `len` entries are emitted; the caller sizes the frame.
    /// A short frame leaves the tail of the strip dark.
    pub fn apply_dense(&mut self, frame: &[Rgb]) {
        let len = self.len;
        self.driver.begin();
        let mut sent: u16 = 0;
        for color in frame.iter().take(usize::from(len)) {
            self.send_pixel(*color);
            sent += 1;
        }
        while sent < len {
            self.send_pixel(OFF);
            sent += 1;
        }
        self.driver.end();
    }

    /// Project a sparse pixel overlay
    ///
    /// Walks the physical positions once, merging against the sorted
    /// buffer; positions without a stored pixel are black. An empty
    /// buffer blanks the strip.
    pub fn apply_sparse<const N: usize>(&mut self, buf: &PixelBuffer<N>) {
        let len = self.len;
        self.driver.begin();
        let mut pending = buf.iter();
        let mut next = pending.next();
        for i in 0..len {
            match next {
                Some(px) if px.pos == i => {
                    self.send_pixel(px.color);
                    next = pending.next();
                }
                _ => self.send_pixel(OFF),
            }
        }
        self.driver.end();
    }

    /// Paint only the first `count` pixels
    ///
    /// Pixels past `count` are not sent and keep their latched color,
    /// which is what the wipe effect relies on.
    pub fn apply_leading(&mut self, color: Rgb, count: u16) {
        let count = count.min(self.len);
        self.driver.begin();
        for _ in 0..count {
            self.send_pixel(color);
        }
        self.driver.end();
    }

    /// Project a generated frame, one call per position
    pub fn apply_fn(&mut self, mut f: impl FnMut(u16) -> Rgb) {
        let len = self.len;
        self.driver.begin();
        for i in 0..len {
            let color = f(i);
            self.send_pixel(color);
        }
        self.driver.end();
    }

    /// Evenly distribute `N` colors across the strip
    ///
    /// Builds an `N`-segment composition of `len / N` pixels each, the
    /// final segment absorbing the integer-division remainder, projects
    /// it and drops it.
    #[allow(clippy::cast_possible_truncation)]
    pub fn distribute<const N: usize>(&mut self, colors: &[Rgb; N]) {
        if N == 0 {
            return;
        }

        let n = N as u16;
        let base = self.len / n;
        let mut buf: SegmentBuffer<N> = SegmentBuffer::new();
        for (i, color) in colors.iter().enumerate() {
            let mut length = base;
            if i == N - 1 {
                length += self.len % n;
            }
            // Capacity N always fits N segments
            let _ = buf.push(Segment {
                length,
                color: *color,
            });
        }
        self.apply_segments(&buf);
    }
}

impl<D: StripDriver> SolidOutput for Strip<D> {
    fn apply_all(&mut self, color: Rgb) {
        let len = self.len;
        self.driver.begin();
        for _ in 0..len {
            self.send_pixel(color);
        }
        self.driver.end();
    }
}

/// Non-addressable RGB strip on three PWM channels
///
/// Single-color strips have no per-pixel addressing, so only the
/// [`SolidOutput`] surface exists; the solid-color engines run on this
/// backend unchanged. Duty-cycle errors are the channel implementation's
/// concern and cannot be reported mid-frame, matching the driver
/// contract of the addressable path.
pub struct PwmStrip<R, G, B> {
    r: R,
    g: G,
    b: B,
}

impl<R, G, B> PwmStrip<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    pub fn new(r: R, g: G, b: B) -> Self {
        Self { r, g, b }
    }

    /// Borrow the three PWM channels
    pub fn channels(&self) -> (&R, &G, &B) {
        (&self.r, &self.g, &self.b)
    }
}

impl<R, G, B> SolidOutput for PwmStrip<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn apply_all(&mut self, color: Rgb) {
        let _ = self.r.set_duty_cycle_fraction(u16::from(color.r), 255);
        let _ = self.g.set_duty_cycle_fraction(u16::from(color.g), 255);
        let _ = self.b.set_duty_cycle_fraction(u16::from(color.b), 255);
    }
}
