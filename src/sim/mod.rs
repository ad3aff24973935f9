//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per display frame, no time delta)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use autopilot::decide;
pub use collision::{check_collisions, update_score};
pub use state::{Avatar, HoldTimer, Obstacle, Playfield, Session, SessionPhase};
pub use tick::{GameEvent, TickInput, TickResult, tick};
