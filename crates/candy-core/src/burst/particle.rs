//! Confetti particle and its animation curve

use std::time::Duration;

use palette::Srgb;
use uuid::Uuid;

use super::random::RandomSource;
use super::{FLIGHT_DURATION, MAX_DELAY, MAX_ROTATION, RISE_MIN, RISE_RANGE, SPREAD_X};

/// Confetti colors
pub const CONFETTI_PALETTE: [Srgb<u8>; 8] = [
    Srgb::new(0xFF, 0x00, 0x6E), // Hot pink
    Srgb::new(0xFB, 0x56, 0x07), // Tangerine
    Srgb::new(0xFF, 0xBE, 0x0B), // Amber
    Srgb::new(0x83, 0x38, 0xEC), // Violet
    Srgb::new(0x3A, 0x86, 0xFF), // Azure
    Srgb::new(0xFF, 0x43, 0x65), // Watermelon
    Srgb::new(0xFB, 0x85, 0xFF), // Orchid
    Srgb::new(0x00, 0xD9, 0xFF), // Electric cyan
];

/// Scale reached at the end of the flight
const END_SCALE: f64 = 0.9;

/// One piece of confetti
///
/// Offsets are in logical pixels relative to the burst origin; negative
/// `offset_y` is up.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: Uuid,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Final rotation in degrees
    pub rotation: f64,
    /// Seconds to wait before the flight starts
    pub delay: f64,
    pub color: Srgb<u8>,
}

/// Interpolated visual state of a particle at some point in its flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl Particle {
    /// Draw a particle from `rng`
    ///
    /// Consumes exactly five values, in order: horizontal offset, vertical
    /// offset, rotation, delay, color.
    pub fn spawn(rng: &mut dyn RandomSource) -> Self {
        let offset_x = (rng.unit() - 0.5) * SPREAD_X * 2.0;
        let offset_y = -rng.unit() * RISE_RANGE - RISE_MIN;
        let rotation = rng.unit() * MAX_ROTATION;
        let delay = rng.unit() * MAX_DELAY;
        let slot = (rng.unit() * CONFETTI_PALETTE.len() as f64) as usize;
        let color = CONFETTI_PALETTE[slot.min(CONFETTI_PALETTE.len() - 1)];

        Self {
            id: Uuid::new_v4(),
            offset_x,
            offset_y,
            rotation,
            delay,
            color,
        }
    }

    /// Eased flight progress in `[0, 1]`, `elapsed` measured from the trigger
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let t = (elapsed.as_secs_f64() - self.delay) / FLIGHT_DURATION.as_secs_f64();
        if t <= 0.0 {
            0.0
        } else {
            ease_out(t.min(1.0))
        }
    }

    /// Whether the particle has finished flying
    pub fn is_landed(&self, elapsed: Duration) -> bool {
        elapsed.as_secs_f64() >= self.delay + FLIGHT_DURATION.as_secs_f64()
    }

    /// Visual state at `elapsed` since the trigger
    pub fn frame(&self, elapsed: Duration) -> ParticleFrame {
        let p = self.progress(elapsed);
        ParticleFrame {
            x: self.offset_x * p,
            y: self.offset_y * p,
            rotation: self.rotation * p,
            opacity: 1.0 - p,
            scale: 1.0 + (END_SCALE - 1.0) * p,
        }
    }
}

/// Cubic ease-out
fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
