//! Looping and one-shot motion curves
//!
//! All functions are pure in `elapsed` so sections stay stateless.

use std::f64::consts::TAU;
use std::time::Duration;

/// Vertical bob in whole rows, oscillating in `[-amplitude, amplitude]`
pub fn bob(elapsed: Duration, period: Duration, amplitude: f64) -> i16 {
    if period.is_zero() {
        return 0;
    }
    let phase = elapsed.as_secs_f64() / period.as_secs_f64();
    ((phase * TAU).sin() * amplitude).round() as i16
}

/// Pulse strength in `[0, 1]`, starting at 0
pub fn pulse(elapsed: Duration, period: Duration) -> f64 {
    if period.is_zero() {
        return 0.0;
    }
    let phase = elapsed.as_secs_f64() / period.as_secs_f64();
    (1.0 - (phase * TAU).cos()) / 2.0
}

/// One-shot progress in `[0, 1]` of an animation that starts after `delay`
pub fn pop_in(elapsed: Duration, delay: Duration, duration: Duration) -> f64 {
    let Some(t) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    if duration.is_zero() {
        return 1.0;
    }
    (t.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Columns still to travel for a slide-in of `distance` columns
pub fn slide_in(elapsed: Duration, duration: Duration, distance: u16) -> u16 {
    let p = pop_in(elapsed, Duration::ZERO, duration);
    let eased = 1.0 - (1.0 - p).powi(3);
    (distance as f64 * (1.0 - eased)).round() as u16
}
