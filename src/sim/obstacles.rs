//! Obstacle spawning, scrolling and recycling
//!
//! Obstacles spawn on a fixed tick cadence at the right edge, scroll left at
//! constant speed, and are evicted once fully past the left bound. All
//! obstacles move at the same speed and insertion is always rightmost, so
//! the column stays ordered oldest-first == leftmost-first.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Obstacle, Playfield, Session};
use crate::consts::*;

/// Spawn, scroll and evict for one tick.
///
/// The spawn cadence is measured in absolute tick count since session start
/// (a cadence divisor, not a countdown), so the first spawn lands on the
/// very first tick.
pub fn advance(session: &mut Session) {
    if session.ticks % SPAWN_INTERVAL == 0 {
        if let Some(obstacle) = spawn(session.playfield, &mut session.rng) {
            session.obstacles.push(obstacle);
        }
    }

    for obstacle in &mut session.obstacles {
        obstacle.x -= SCROLL_SPEED;
    }

    // Evict from the low end only; survivors keep order and passed flags
    session.obstacles.retain(|o| o.trailing_edge() > 0.0);
}

/// Place a gap uniformly at random, keeping `GAP_MARGIN` clearance from both
/// bounds. Playfields too short to host the gap spawn nothing rather than
/// producing malformed geometry.
fn spawn(playfield: Playfield, rng: &mut Pcg32) -> Option<Obstacle> {
    let max_gap_top = playfield.height - GAP_HEIGHT - GAP_MARGIN;
    if max_gap_top < GAP_MARGIN {
        log::warn!(
            "playfield height {} cannot host a {} gap, skipping spawn",
            playfield.height,
            GAP_HEIGHT
        );
        return None;
    }

    let gap_top = rng.random_range(GAP_MARGIN..=max_gap_top);
    Some(Obstacle {
        x: playfield.width,
        width: OBSTACLE_WIDTH,
        gap_top,
        gap_bottom: playfield.height - gap_top - GAP_HEIGHT,
        passed: false,
        tint: rng.random_range(0..TINT_COUNT),
    })
}
