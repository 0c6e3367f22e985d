//! Color primitives: brightness scaling, the discrete hue wheel and the
//! scroll color wheel.
//!
//! The hue wheel walks red→green→blue→red by moving one rising and one
//! falling channel in lockstep, so exactly one channel pair is active at
//! any time and the channel sum stays at 255.

use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Number of discrete positions on the hue wheel (3 segments of 255)
pub const WHEEL_POSITIONS: u16 = 765;

/// Scale a color in place by a brightness factor (0 = off, 255 = 100%)
///
/// Each channel is scaled linearly with rounding. Scaling by 255 is an
/// identity and leaves the color untouched.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn apply_brightness(rgb: &mut Rgb, brightness: u8) {
    if brightness == 255 {
        return;
    }

    let scale = f32::from(brightness) / 255.0;
    rgb.r = libm::roundf(scale * f32::from(rgb.r)) as u8;
    rgb.g = libm::roundf(scale * f32::from(rgb.g)) as u8;
    rgb.b = libm::roundf(scale * f32::from(rgb.b)) as u8;
}

/// Copying variant of [`apply_brightness`]
///
/// Used where the stored value must stay unscaled, e.g. the rainbow
/// engine's hue state.
pub fn scaled(rgb: Rgb, brightness: u8) -> Rgb {
    let mut out = rgb;
    apply_brightness(&mut out, brightness);
    out
}

/// Advance a color along the hue wheel by `step_size` positions
///
/// A `step_size` of 0 is treated as 1. Values off the wheel (all three
/// channels nonzero) are snapped back to pure red before stepping.
///
/// Segment crossings are detected with `overflowing_sub`: the wrapped
/// difference carries over into the next channel pair, so large steps
/// land where repeated unit steps would.
pub fn advance_hue(rgb: &mut Rgb, step_size: u8) {
    if rgb.r != 0 && rgb.g != 0 && rgb.b != 0 {
        *rgb = RED;
    }

    let step = if step_size == 0 { 1 } else { step_size };

    let r2g = rgb.g < 255 && rgb.b == 0;

    if r2g {
        let (next, crossed) = rgb.r.overflowing_sub(step);
        if crossed {
            rgb.r = 0;
            rgb.g = next;
            rgb.b = 255 - next;
        } else {
            rgb.r = next;
            rgb.g = rgb.g.saturating_add(step);
        }
    } else if rgb.g > 0 {
        let (next, crossed) = rgb.g.overflowing_sub(step);
        if crossed {
            rgb.g = 0;
            rgb.b = next;
            rgb.r = 255 - next;
        } else {
            rgb.g = next;
            rgb.b = rgb.b.saturating_add(step);
        }
    } else {
        let (next, crossed) = rgb.b.overflowing_sub(step);
        if crossed {
            rgb.b = 0;
            rgb.r = next;
            rgb.g = 255 - next;
        } else {
            rgb.b = next;
            rgb.r = rgb.r.saturating_add(step);
        }
    }
}

/// Map a position on the 0..=764 color wheel to a color
///
/// The wheel is three linear segments of 255 units each
/// (red→green, green→blue, blue→red); `val` is taken modulo 765.
#[allow(clippy::cast_possible_truncation)]
pub fn wheel(val: u16) -> Rgb {
    let val = val % WHEEL_POSITIONS;

    if val < 256 {
        Rgb {
            r: (255 - val) as u8,
            g: val as u8,
            b: 0,
        }
    } else if val < 511 {
        let val = val - 255;
        Rgb {
            r: 0,
            g: (255 - val) as u8,
            b: val as u8,
        }
    } else {
        let val = val - 510;
        Rgb {
            r: val as u8,
            g: 0,
            b: (255 - val) as u8,
        }
    }
}
