//! Rain: randomly spawned droplets that fade to black
//!
//! Droplets live in a sparse [`PixelBuffer`] owned by the engine for its
//! whole lifetime. Decay and spawning run on one explicit time base:
//! `timer_start` anchors elapsed time and `decay_due` is the elapsed
//! offset at which the next decay step falls due. Spawning rewinds the
//! base so a fresh droplet's first decay keeps phase with the rest.

use embassy_time::{Duration, Instant};

use crate::StripDriver;
use crate::color::{OFF, Rgb};
use crate::pixel::PixelBuffer;
use crate::rng::Rng;
use crate::strip::Strip;

/// Raindrop effect
///
/// `N` caps the droplets held at once; the runtime `max_drops` argument
/// is honored up to that capacity.
#[derive(Debug)]
pub struct Rain<const N: usize> {
    drops: PixelBuffer<N>,
    rng: Rng,
    timer_start: Instant,
    decay_due: Duration,
}

impl<const N: usize> Rain<N> {
    pub const fn new(seed: u32) -> Self {
        Self {
            drops: PixelBuffer::new(),
            rng: Rng::new(seed),
            timer_start: Instant::from_millis(0),
            decay_due: Duration::from_millis(0),
        }
    }

    /// Number of currently active droplets
    pub fn drop_count(&self) -> usize {
        self.drops.len()
    }

    /// Step the effect and project the droplet overlay
    ///
    /// Per eligible decay interval every channel of every droplet drops
    /// by one; droplets that reached black leave on the following tick.
    /// New droplets appear at a random free position at a uniformly
    /// random interval in `[min_t_apart, max_t_apart]`, as long as fewer
    /// than `max_drops` are active.
    #[allow(clippy::too_many_arguments, clippy::cast_possible_truncation)]
    pub fn tick<D: StripDriver>(
        &mut self,
        strip: &mut Strip<D>,
        color: Rgb,
        max_drops: u16,
        min_t_apart: Duration,
        max_t_apart: Duration,
        decay_delay: Duration,
        now: Instant,
    ) {
        let elapsed = now.duration_since(self.timer_start);
        let decay_now = elapsed >= self.decay_due;

        // Spent droplets leave on the tick after they reach black
        self.drops.retain(|px| px.color != OFF);

        if decay_now {
            for c in self.drops.colors_mut() {
                c.r = c.r.saturating_sub(1);
                c.g = c.g.saturating_sub(1);
                c.b = c.b.saturating_sub(1);
            }
            self.decay_due = elapsed + decay_delay;
        }

        // Spawn interval is re-rolled every tick
        let span_ms = max_t_apart
            .as_millis()
            .saturating_sub(min_t_apart.as_millis());
        let span = u32::try_from(span_ms.saturating_add(1)).unwrap_or(u32::MAX);
        let interval =
            Duration::from_millis(min_t_apart.as_millis() + u64::from(self.rng.range(span)));

        let cap = usize::from(max_drops).min(N);
        if elapsed >= interval && self.drops.len() < cap && strip.len() > 0 {
            let pos = self.rng.range(u32::from(strip.len())) as u16;
            if !self.drops.contains(pos) {
                // Cannot exceed capacity: the count is below `cap <= N`
                let _ = self.drops.insert(pos, color);

                // Rewind the time base so the elapsed part of the decay
                // interval is not lost
                self.decay_due = Duration::from_millis(
                    self.decay_due.as_millis().saturating_sub(elapsed.as_millis()),
                );
                self.timer_start = now;
            }
        }

        strip.apply_sparse(&self.drops);
    }
}
