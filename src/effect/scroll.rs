//! Stateless color-wheel scroll

use crate::SolidOutput;
use crate::color::{scaled, wheel};

/// Project one position of the 0..=764 color wheel at a brightness
///
/// Stateless by design: the caller owns the wheel position, typically
/// wired straight to an input dial.
pub fn scroll<S: SolidOutput>(out: &mut S, val: u16, brightness: u8) {
    out.apply_all(scaled(wheel(val), brightness));
}
