// src/gui/anim.rs
//
// Time → visual offset helpers. Pure; the frame loop feeds elapsed time.

use std::time::Duration;

use crate::config::consts::{
    ROW_FADE_MS, ROW_STAGGER_MS, SHAKE_AMPLITUDE, SHAKE_ITERATIONS, SHAKE_PERIOD_MS,
};

fn ms(d: Duration) -> f32 { d.as_secs_f32() * 1000.0 }

pub fn shake_active(elapsed: Duration) -> bool {
    ms(elapsed) < (SHAKE_PERIOD_MS * SHAKE_ITERATIONS as u64) as f32
}

/// Horizontal offset of a shaking error label.
/// Keyframes per iteration: -A, +A, 0.
pub fn shake_offset(elapsed: Duration) -> f32 {
    if !shake_active(elapsed) { return 0.0; }
    let period = SHAKE_PERIOD_MS as f32;
    let p = (ms(elapsed) % period) / period;
    let a = SHAKE_AMPLITUDE;
    if p < 0.5 {
        -a + 2.0 * a * (p / 0.5)
    } else {
        a - a * ((p - 0.5) / 0.5)
    }
}

/// Opacity of result row `i`, staggered by row.
pub fn row_opacity(elapsed: Duration, i: usize) -> f32 {
    let delay = (ROW_STAGGER_MS as f32) * i as f32;
    ((ms(elapsed) - delay) / ROW_FADE_MS as f32).clamp(0.0, 1.0)
}

/// Slide-in distance still to travel for row `i`.
pub fn row_slide(elapsed: Duration, i: usize) -> f32 {
    (1.0 - row_opacity(elapsed, i)) * 16.0
}

pub fn rows_settled(elapsed: Duration, rows: usize) -> bool {
    rows == 0 || row_opacity(elapsed, rows - 1) >= 1.0
}
