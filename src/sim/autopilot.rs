//! Autopilot heuristic
//!
//! A reactive threshold controller: aim for the middle of a safe band (the
//! gap with a fraction shaved off each edge) and look one integration step
//! ahead before committing to a jump. Runs in place of player input while
//! armed.

use super::state::{Avatar, Obstacle};
use crate::consts::*;

/// Decide whether to jump this tick. Invoked before physics integration;
/// a `true` result feeds the session's jump.
pub fn decide(avatar: &Avatar, obstacles: &[Obstacle], playfield_height: f32) -> bool {
    // Nearest obstacle whose trailing edge is still ahead of the avatar's
    // leading edge
    let target = obstacles
        .iter()
        .find(|o| o.trailing_edge() > avatar.pos.x - avatar.radius);

    let Some(obstacle) = target else {
        // Nothing in range: hold roughly to the vertical center
        return avatar.pos.y > playfield_height / 2.0 + CENTER_TOLERANCE && avatar.vel >= 0.0;
    };

    let gap_top = obstacle.gap_top;
    let gap_bottom = playfield_height - obstacle.gap_bottom;

    // Safe band: the middle of the gap, edges shaved by the safety fraction
    let band_top = gap_top + GAP_HEIGHT * GAP_SAFETY_FRACTION;
    let band_bottom = gap_bottom - GAP_HEIGHT * GAP_SAFETY_FRACTION;
    let target_y = (band_top + band_bottom) / 2.0;

    // One integration step of lookahead
    let predicted = avatar.pos.y + avatar.vel + GRAVITY;

    // Jump when sagging below the band center while falling or level, or
    // when the next step would breach the lower safety edge. Near the top
    // edge while still rising, gravity is left to act on its own.
    (avatar.pos.y > target_y + TARGET_TOLERANCE && avatar.vel >= 0.0)
        || predicted > band_bottom - avatar.radius / 2.0
}
