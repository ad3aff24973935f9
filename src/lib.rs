//! Gapwing - a scrolling gated-obstacle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions,
//!   scoring, autopilot, session lifecycle)
//!
//! Rendering, menus, score display and platform event wiring live in the
//! embedding frontend. The frontend drives [`sim::tick`] once per display
//! refresh, reads the [`sim::Session`] to draw, forwards press/release edges
//! through [`sim::TickInput`], and reacts to [`sim::GameEvent`]
//! notifications. `src/main.rs` is a headless stand-in for that frontend.

pub mod sim;

pub use sim::{GameEvent, Playfield, Session, SessionPhase, TickInput, TickResult};

/// Game configuration constants
pub mod consts {
    /// Avatar collision radius, constant for a session
    pub const AVATAR_RADIUS: f32 = 20.0;
    /// Downward velocity gained per tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity assigned (not added) on jump; negative is up
    pub const LIFT: f32 = -8.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    /// Fixed vertical gap size
    pub const GAP_HEIGHT: f32 = 200.0;
    /// Ticks between spawns, measured in absolute tick count since start
    pub const SPAWN_INTERVAL: u64 = 100;
    /// Horizontal scroll per tick
    pub const SCROLL_SPEED: f32 = 4.0;
    /// Minimum clearance between a gap edge and the playfield bounds
    pub const GAP_MARGIN: f32 = 50.0;
    /// Size of the frontend palette an obstacle tint indexes into
    pub const TINT_COUNT: u8 = 6;

    /// Nominal frames per second of the frame driver (one tick per frame)
    pub const TICK_RATE: u32 = 60;
    /// Ticks of sustained press before the autopilot arms (~250 ms)
    pub const HOLD_ARM_TICKS: u64 = 15;

    /// Fraction of the gap shaved off each edge for the autopilot's safe band
    pub const GAP_SAFETY_FRACTION: f32 = 0.2;
    /// Slack below the band center before a corrective jump
    pub const TARGET_TOLERANCE: f32 = 5.0;
    /// Slack below the playfield center when no obstacle is in range
    pub const CENTER_TOLERANCE: f32 = 10.0;
}
