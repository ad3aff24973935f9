//! Fixed-step session tick
//!
//! One tick per display frame, no time delta. Per-tick order: input events,
//! autopilot decision, physics, obstacle advance, collision check, scoring.

use serde::{Deserialize, Serialize};

use super::autopilot;
use super::collision;
use super::obstacles;
use super::state::{Session, SessionPhase};

/// Discrete input events gathered by the frontend since the last tick.
///
/// Press/release are one-shot edges: the frontend sets them when the
/// platform events fire and clears them once a tick has consumed them. At
/// most one press edge per tick is assumed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// A press (pointer/touch/key down) began
    pub press: bool,
    /// The press was released
    pub release: bool,
}

/// Notifications for the frontend, in the order they occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The score changed; carries the new total
    ScoreChanged(u32),
    /// Terminal collision; carries the final score
    SessionEnded(u32),
}

/// What a single tick produced.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Whether the frame driver should keep looping
    pub running: bool,
    /// Events generated this tick
    pub events: Vec<GameEvent>,
}

/// Advance the session by one tick.
///
/// Only a Running session advances; Idle and Ended sessions ignore input and
/// report `running = false`, so a redundant tick after termination is a
/// no-op.
pub fn tick(session: &mut Session, input: &TickInput) -> TickResult {
    let mut result = TickResult::default();
    if session.phase != SessionPhase::Running {
        return result;
    }

    // Input edges in arrival order: a press schedules the hold deadline, the
    // deadline arms the autopilot, a release cancels the deadline and taps
    // exactly one jump if the autopilot never armed.
    if input.press {
        session.press_started();
    }
    session.poll_hold_timer();
    if input.release {
        session.press_released();
    }

    if session.autopilot
        && autopilot::decide(&session.avatar, &session.obstacles, session.playfield.height)
    {
        session.jump();
    }

    session.avatar.integrate();
    obstacles::advance(session);

    let alive = collision::check_collisions(
        &session.avatar,
        session.playfield.height,
        &session.obstacles,
    );

    // Scoring still runs on a terminal tick, so an obstacle cleared at the
    // collision moment counts toward the final score
    let delta = collision::update_score(&session.avatar, &mut session.obstacles);
    if delta > 0 {
        session.score += delta;
        result.events.push(GameEvent::ScoreChanged(session.score));
    }

    session.ticks += 1;

    if !alive {
        session.end();
        result.events.push(GameEvent::SessionEnded(session.score));
    }

    result.running = session.phase == SessionPhase::Running;
    result
}
