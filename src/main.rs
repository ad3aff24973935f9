//! Gapwing entry point
//!
//! Headless demo driver standing in for a rendering frontend: starts a
//! session, holds the press long enough to arm the autopilot, then lets it
//! fly until the run ends or the tick cap is reached.

use gapwing::consts::TICK_RATE;
use gapwing::sim::{GameEvent, Playfield, Session, TickInput, tick};

/// Demo tick cap: five minutes of simulated play
const MAX_TICKS: u64 = 5 * 60 * TICK_RATE as u64;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let mut session = Session::new(Playfield::new(800.0, 600.0), seed);
    session.start();

    // Press on the first tick and never release: the hold deadline fires and
    // the autopilot takes over
    let mut input = TickInput {
        press: true,
        release: false,
    };

    for _ in 0..MAX_TICKS {
        let result = tick(&mut session, &input);
        input = TickInput::default();

        for event in &result.events {
            match event {
                GameEvent::ScoreChanged(score) => log::info!("score {score}"),
                GameEvent::SessionEnded(score) => log::info!("run ended at {score}"),
            }
        }

        if !result.running {
            break;
        }
    }

    let summary = serde_json::json!({
        "seed": session.seed,
        "phase": session.phase,
        "ticks": session.ticks,
        "score": session.score,
    });
    println!("{summary}");
}
