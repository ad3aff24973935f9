//! Session state and core simulation types
//!
//! Everything that must survive a tick lives here. A `Session` owns its
//! avatar and obstacle column by value, so independent sessions can run side
//! by side and tests can drive them deterministically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Playfield dimensions, supplied by the frontend.
///
/// May change between sessions (surface resize) but never mid-tick; a change
/// goes through [`Session::resize`] and forces a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The player avatar.
///
/// Horizontal position is fixed for the whole session; only the vertical
/// coordinate responds to gravity and jumps. Velocity is positive downward
/// (screen coordinates).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    /// Vertical velocity
    pub vel: f32,
    /// Collision radius, constant for a session
    pub radius: f32,
}

impl Avatar {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: 0.0,
            radius: AVATAR_RADIUS,
        }
    }

    /// One Euler step under constant gravity.
    ///
    /// No bounds clamping happens here: leaving the playfield is a terminal
    /// collision, not a constraint.
    pub fn integrate(&mut self) {
        self.vel += GRAVITY;
        self.pos.y += self.vel;
    }

    /// Overwrite the velocity with the fixed upward lift.
    pub fn apply_jump(&mut self) {
        self.vel = LIFT;
    }
}

/// A gated obstacle: two solid segments with a fixed-height gap between them.
///
/// `gap_top + GAP_HEIGHT + gap_bottom == playfield height` by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge, decreasing every tick
    pub x: f32,
    pub width: f32,
    /// Solid extent from the top bound down to the gap
    pub gap_top: f32,
    /// Solid extent from the gap down to the bottom bound
    pub gap_bottom: f32,
    /// Scoring idempotence marker
    pub passed: bool,
    /// Palette index for the frontend; no effect on the simulation
    pub tint: u8,
}

impl Obstacle {
    /// Trailing (right) edge
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }
}

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No run in progress, avatar parked at the rest position
    Idle,
    /// Loop ticking
    Running,
    /// Terminal display state, avatar and obstacles frozen at the collision
    /// moment
    Ended,
}

/// Pending hold-to-arm deadline.
///
/// An explicit deferred value owned by the session rather than an ambient
/// timer handle: cancellation on release, reset or session end is a field
/// write, never a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldTimer {
    /// Tick at which the sustained press arms the autopilot
    pub fires_at: u64,
}

/// A complete game session: state machine, avatar, obstacle column, score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Construction seed, kept for reproducibility reporting
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub playfield: Playfield,
    pub phase: SessionPhase,
    pub avatar: Avatar,
    /// Oldest first; creation order equals ascending horizontal order
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Completed ticks this run; gates spawn cadence only
    pub ticks: u64,
    /// Autopilot currently flying the avatar
    pub autopilot: bool,
    hold_timer: Option<HoldTimer>,
}

impl Session {
    /// Create a parked session. No run starts until [`Session::start`].
    pub fn new(playfield: Playfield, seed: u64) -> Self {
        let mut session = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            playfield,
            phase: SessionPhase::Idle,
            avatar: Avatar::new(Vec2::ZERO),
            obstacles: Vec::new(),
            score: 0,
            ticks: 0,
            autopilot: false,
            hold_timer: None,
        };
        session.park_avatar();
        session
    }

    /// Start a run. Valid from Idle and Ended; a no-op while Running.
    pub fn start(&mut self) {
        if self.phase == SessionPhase::Running {
            return;
        }
        self.reset();
        self.phase = SessionPhase::Running;
        log::info!("session started (seed {})", self.seed);
    }

    /// Restart after a terminal collision. Same reset path as `start`;
    /// only valid from Ended.
    pub fn restart(&mut self) {
        if self.phase == SessionPhase::Ended {
            self.start();
        }
    }

    /// Replace the playfield dimensions and fully reset to Idle.
    pub fn resize(&mut self, playfield: Playfield) {
        self.playfield = playfield;
        self.reset();
        self.phase = SessionPhase::Idle;
        log::info!(
            "playfield resized to {}x{}, session reset",
            playfield.width,
            playfield.height
        );
    }

    /// Reset every run-scoped field. Pending hold timers are canceled on
    /// every path that ends or resets the run, so a stale one can never
    /// re-arm the autopilot after a restart.
    fn reset(&mut self) {
        self.obstacles.clear();
        self.score = 0;
        self.ticks = 0;
        self.autopilot = false;
        self.hold_timer = None;
        self.park_avatar();
    }

    /// Rest position: a quarter in from the left, vertically centered,
    /// clamped inside the bounds whenever the playfield can hold the avatar.
    fn park_avatar(&mut self) {
        let radius = self.avatar.radius;
        let mut y = self.playfield.height / 2.0;
        if self.playfield.height >= 2.0 * radius {
            y = y.clamp(radius, self.playfield.height - radius);
        }
        self.avatar = Avatar::new(Vec2::new(self.playfield.width / 4.0, y));
    }

    /// Terminal collision. Idempotent: ending an already-Ended session is a
    /// no-op. The avatar and obstacles freeze exactly where the tick left
    /// them.
    pub(crate) fn end(&mut self) {
        if self.phase == SessionPhase::Ended {
            return;
        }
        self.phase = SessionPhase::Ended;
        self.autopilot = false;
        self.hold_timer = None;
        log::info!("session ended with score {}", self.score);
    }

    /// Jump only affects a live run.
    pub(crate) fn jump(&mut self) {
        if self.phase == SessionPhase::Running {
            self.avatar.apply_jump();
        }
    }

    /// A press begins: assume a tap until the hold deadline proves otherwise.
    pub(crate) fn press_started(&mut self) {
        self.autopilot = false;
        self.hold_timer = Some(HoldTimer {
            fires_at: self.ticks + HOLD_ARM_TICKS,
        });
    }

    /// The press was released: cancel the pending deadline (guaranteed, not
    /// best-effort), tap exactly one jump if the autopilot never armed, and
    /// always disarm.
    pub(crate) fn press_released(&mut self) {
        self.hold_timer = None;
        if !self.autopilot {
            self.jump();
        }
        self.autopilot = false;
    }

    /// Arm the autopilot once the press has been held long enough.
    pub(crate) fn poll_hold_timer(&mut self) {
        if let Some(timer) = self.hold_timer {
            if self.ticks >= timer.fires_at {
                self.hold_timer = None;
                self.autopilot = true;
                log::debug!("autopilot armed at tick {}", self.ticks);
            }
        }
    }

    /// Pending hold deadline, if a press is currently held.
    pub fn hold_timer(&self) -> Option<HoldTimer> {
        self.hold_timer
    }
}
