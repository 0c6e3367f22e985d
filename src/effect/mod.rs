//! Animation engines
//!
//! Stateful step machines invoked once per host-loop frame. Every engine
//! keeps its state in an explicit struct and is non-blocking: a `tick`
//! either returns immediately because its delay has not elapsed, or
//! advances the state by exactly one step and projects the new frame.
//! The host passes the current time into every call; engines never read
//! a clock themselves.
//!
//! Engines that run through repeating cycles expose `restart` to force a
//! clean start instead of resuming stale state.

mod breathe;
mod fade;
mod rain;
mod rainbow;
mod scroll;
mod wipe;

pub use breathe::{Breathe, BreatheArray, BreatheRainbow, BreatheRandom};
pub use fade::{BrightnessWave, Fade};
pub use rain::Rain;
pub use rainbow::{Rainbow, RotateRainbow};
pub use scroll::scroll;
pub use wipe::{Wipe, WipeArray, WipeRainbow};
