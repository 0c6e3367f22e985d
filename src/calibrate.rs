//! Interactive strip-length calibration
//!
//! A modal, blocking loop entered outside normal animation operation
//! (first boot, or a long button hold in the host firmware). The strip
//! shows a white filled run, a single green endpoint marker and a dark
//! remainder; the user walks the marker to the physical end of the strip
//! and commits. The committed length is written to persistent storage
//! and becomes the projection bound for every other entry point.

use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;

use crate::color::{GREEN, OFF, WHITE};
use crate::segment::{Segment, SegmentBuffer};
use crate::strip::Strip;
use crate::{SolidOutput, StripDriver};

/// Widest strip the calibration pattern can address
pub const CALIBRATION_RANGE: u16 = 256;

/// Button hold time that commits the current length
const HOLD_TO_COMMIT: Duration = Duration::from_millis(1000);

/// On/off time of the confirmation blink
const BLINK_MS: u32 = 200;

/// Monotonic time source for the blocking calibration loop
///
/// Animation engines receive the time from the host on every call; the
/// calibration procedure owns its loop and polls a clock instead.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// User input consumed by calibration
pub trait ControlInput {
    /// Current button level
    fn button_pressed(&mut self) -> bool;

    /// Potentiometer position, averaged over `samples` reads
    fn read_pot(&mut self, samples: u8) -> u8;
}

/// Persistent storage for the calibrated strip length
pub trait SizeStore {
    /// Stored length, `None` before the first calibration
    fn load(&mut self) -> Option<u16>;

    /// Durably record a calibrated length
    fn store(&mut self, len: u16);
}

/// Calibration settings
#[derive(Debug, Clone, Copy, Default)]
pub struct CalibrationConfig {
    /// Wait after a button press before the hold timer is armed;
    /// zero disables debouncing
    pub debounce: Duration,
}

/// Interactive calibration procedure
pub struct Calibrator {
    config: CalibrationConfig,
}

impl Calibrator {
    pub const fn new(config: CalibrationConfig) -> Self {
        Self { config }
    }

    /// Run the calibration loop to completion
    ///
    /// The potentiometer positions the marker coarsely; a press-release
    /// steps it one pixel further; holding the button for a second
    /// commits. On commit the chosen length is persisted and applied to
    /// the strip, the pattern blinks three times and the strip goes
    /// dark. Returns the committed length.
    pub fn run<D, I, S, C, W>(
        &self,
        strip: &mut Strip<D>,
        input: &mut I,
        store: &mut S,
        clock: &C,
        delay: &mut W,
    ) -> u16
    where
        D: StripDriver,
        I: ControlInput,
        S: SizeStore,
        C: Clock,
        W: DelayNs,
    {
        // The pattern must reach past any previously stored length
        strip.set_len(CALIBRATION_RANGE);

        let mut pattern: SegmentBuffer<3> = SegmentBuffer::new();
        let _ = pattern.push(Segment {
            length: 0,
            color: WHITE,
        });
        // Endpoint marker
        let _ = pattern.push(Segment {
            length: 1,
            color: GREEN,
        });
        let _ = pattern.push(Segment {
            length: CALIBRATION_RANGE - 1,
            color: OFF,
        });

        strip.apply_segments(&pattern);

        // Wait out a press that carried over from entering calibration
        while input.button_pressed() {}

        let mut prev_pressed = false;
        let mut prev_pot = input.read_pot(255);
        let mut hold_since = clock.now();

        loop {
            let pressed = input.button_pressed();

            if !prev_pressed && pressed {
                // Rising edge: debounce, then arm the hold timer
                let debounce_ms = self.config.debounce.as_millis();
                if debounce_ms > 0 {
                    delay.delay_ms(u32::try_from(debounce_ms).unwrap_or(u32::MAX));
                }
                hold_since = clock.now();
            } else if pressed {
                if clock.now().duration_since(hold_since) >= HOLD_TO_COMMIT {
                    return Self::commit(strip, store, &pattern, delay);
                }
                continue;
            } else if prev_pressed && !pressed {
                // Release: fine-step the boundary one pixel
                if let Some(filled) = pattern.get_mut(0) {
                    if filled.length < CALIBRATION_RANGE - 1 {
                        filled.length += 1;
                    }
                }
                if let Some(rest) = pattern.get_mut(2) {
                    rest.length = rest.length.saturating_sub(1);
                }
            }

            let pot = input.read_pot(255);
            if pot != prev_pot {
                // Coarse boundary straight from the dial
                if let Some(filled) = pattern.get_mut(0) {
                    filled.length = u16::from(pot);
                }
                if let Some(rest) = pattern.get_mut(2) {
                    rest.length = (CALIBRATION_RANGE - 2).saturating_sub(u16::from(pot));
                }
            }

            strip.apply_segments(&pattern);
            prev_pressed = pressed;
            prev_pot = pot;
        }
    }

    fn commit<D, S, W>(
        strip: &mut Strip<D>,
        store: &mut S,
        pattern: &SegmentBuffer<3>,
        delay: &mut W,
    ) -> u16
    where
        D: StripDriver,
        S: SizeStore,
        W: DelayNs,
    {
        // Filled run plus the marker pixel
        let filled = pattern.get(0).map_or(0, |s| s.length);
        let len = filled + 1;

        store.store(len);
        strip.set_len(len);

        #[cfg(feature = "defmt")]
        defmt::debug!("calibrated strip length: {=u16}", len);

        for _ in 0..3 {
            strip.apply_all(OFF);
            delay.delay_ms(BLINK_MS);
            strip.apply_segments(pattern);
            delay.delay_ms(BLINK_MS);
        }
        strip.apply_all(OFF);
        delay.delay_ms(BLINK_MS);

        len
    }
}
