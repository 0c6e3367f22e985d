//! Shared test infrastructure for led-strip-engine integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use led_strip_engine::calibrate::{Clock, ControlInput, SizeStore};
use led_strip_engine::{
    ChannelOrder, Instant, Rgb, SolidOutput, Strip, StripConfig, StripDriver,
};

// ============================================================================
// Recording byte driver
// ============================================================================

/// Frames captured by a [`RecordingDriver`]
#[derive(Default)]
pub struct DriverLog {
    pub frames: Vec<Vec<u8>>,
    current: Option<Vec<u8>>,
}

impl DriverLog {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Vec<u8> {
        self.frames.last().cloned().expect("no frames recorded")
    }

    /// Last frame split into `[r-wire, g-wire, b-wire]` pixel triples
    pub fn last_pixels(&self) -> Vec<[u8; 3]> {
        pixels(&self.last_frame())
    }
}

/// Byte-level strip driver that records every frame
///
/// Panics on unbalanced begin/end bracketing, so every test implicitly
/// checks the one-begin-one-end-per-frame contract.
pub struct RecordingDriver {
    log: Rc<RefCell<DriverLog>>,
}

impl RecordingDriver {
    pub fn new() -> (Self, Rc<RefCell<DriverLog>>) {
        let log = Rc::new(RefCell::new(DriverLog::default()));
        (Self { log: Rc::clone(&log) }, log)
    }
}

impl StripDriver for RecordingDriver {
    fn begin(&mut self) {
        let mut log = self.log.borrow_mut();
        assert!(log.current.is_none(), "begin while a frame is open");
        log.current = Some(Vec::new());
    }

    fn send(&mut self, byte: u8) {
        let mut log = self.log.borrow_mut();
        log.current
            .as_mut()
            .expect("send outside a begin/end frame")
            .push(byte);
    }

    fn end(&mut self) {
        let mut log = self.log.borrow_mut();
        let frame = log.current.take().expect("end without begin");
        log.frames.push(frame);
    }
}

/// Split a raw frame into pixel triples
pub fn pixels(frame: &[u8]) -> Vec<[u8; 3]> {
    assert_eq!(frame.len() % 3, 0, "frame not a whole number of pixels");
    frame.chunks(3).map(|c| [c[0], c[1], c[2]]).collect()
}

/// Strip over a recording driver, wired `Rgb` so triples read as (r, g, b)
pub fn test_strip(len: u16) -> (Strip<RecordingDriver>, Rc<RefCell<DriverLog>>) {
    let (driver, log) = RecordingDriver::new();
    let strip = Strip::new(
        driver,
        StripConfig {
            order: ChannelOrder::Rgb,
            len,
        },
    );
    (strip, log)
}

pub fn triple(color: Rgb) -> [u8; 3] {
    [color.r, color.g, color.b]
}

// ============================================================================
// Solid-color recorder
// ============================================================================

/// Records every solid color applied, for the whole-strip engines
#[derive(Default)]
pub struct SolidRecorder {
    pub colors: Vec<Rgb>,
}

impl SolidOutput for SolidRecorder {
    fn apply_all(&mut self, color: Rgb) {
        self.colors.push(color);
    }
}

// ============================================================================
// Manual clock and clock-driven delay
// ============================================================================

/// Manually advanced time source
pub struct ManualClock {
    nanos: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { nanos: Cell::new(0) }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.nanos.set(self.nanos.get() + ms * 1_000_000);
    }

    pub fn advance_ns(&self, ns: u64) {
        self.nanos.set(self.nanos.get() + ns);
    }

    pub fn millis(&self) -> u64 {
        self.nanos.get() / 1_000_000
    }

    pub fn now(&self) -> Instant {
        Instant::from_millis(self.millis())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        ManualClock::now(self)
    }
}

/// Blocking delay that advances the manual clock instead of sleeping
pub struct ClockDelay<'a> {
    pub clock: &'a ManualClock,
}

impl DelayNs for ClockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(u64::from(ns));
    }
}

// ============================================================================
// Scripted calibration input
// ============================================================================

/// Time-scripted button and potentiometer
///
/// Every button poll advances the clock by one millisecond, standing in
/// for the latency of one pass through the calibration loop; without
/// this the blocking loop would never observe time passing.
pub struct TimedInput<'a> {
    clock: &'a ManualClock,
    /// Half-open `[from, to)` millisecond windows with the button down
    press_windows: Vec<(u64, u64)>,
    /// `(from_ms, value)` potentiometer schedule, ascending
    pot_schedule: Vec<(u64, u8)>,
}

impl<'a> TimedInput<'a> {
    pub fn new(
        clock: &'a ManualClock,
        press_windows: Vec<(u64, u64)>,
        pot_schedule: Vec<(u64, u8)>,
    ) -> Self {
        Self {
            clock,
            press_windows,
            pot_schedule,
        }
    }
}

impl ControlInput for TimedInput<'_> {
    fn button_pressed(&mut self) -> bool {
        self.clock.advance_ms(1);
        let t = self.clock.millis();
        self.press_windows.iter().any(|&(from, to)| t >= from && t < to)
    }

    fn read_pot(&mut self, _samples: u8) -> u8 {
        let t = self.clock.millis();
        self.pot_schedule
            .iter()
            .take_while(|&&(from, _)| from <= t)
            .last()
            .map_or(0, |&(_, value)| value)
    }
}

// ============================================================================
// Mock size store
// ============================================================================

#[derive(Default)]
pub struct MockStore {
    pub saved: Option<u16>,
}

impl SizeStore for MockStore {
    fn load(&mut self) -> Option<u16> {
        self.saved
    }

    fn store(&mut self, len: u16) {
        self.saved = Some(len);
    }
}
