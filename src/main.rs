//! Carrot Hop entry point
//!
//! Runs the simulation headless against the reference arcade host with a
//! scripted input, restarting once after the first fall.

use std::time::{SystemTime, UNIX_EPOCH};

use carrot_hop::arcade::HeadlessArcade;
use carrot_hop::consts::SIM_DT;
use carrot_hop::sim::TickInput;
use carrot_hop::{Settings, Simulation};

/// Default number of frames to run
const DEFAULT_TICKS: u64 = 60 * 60;

/// Scripted steering: bounce in place, hold left, hold right, then drag with the pointer
fn scripted_input(frame: u64) -> TickInput {
    match (frame / 90) % 4 {
        0 => TickInput::default(),
        1 => TickInput {
            left: true,
            ..Default::default()
        },
        2 => TickInput {
            right: true,
            ..Default::default()
        },
        _ => TickInput {
            pointer: Some(240.0 + (frame % 90) as f32),
            ..Default::default()
        },
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Carrot Hop (headless) starting...");

    let ticks = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TICKS);

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(time_seed);
    if settings.debug_bodies {
        log::info!("Debug bodies requested; the headless host has nothing to draw");
    }

    let mut arcade = HeadlessArcade::new().with_volume(settings.effective_volume());
    let mut sim = Simulation::new(seed);
    sim.create(&mut arcade);

    let mut restarted = false;
    for frame in 0..ticks {
        arcade.step(SIM_DT);
        sim.frame(&mut arcade, &scripted_input(frame));

        if sim.is_game_over() {
            log::info!(
                "Fell at frame {} ({}, {} cues played)",
                frame,
                arcade.score_text,
                arcade.sounds.len()
            );
            if restarted {
                break;
            }
            sim.restart(&mut arcade);
            restarted = true;
        }
    }

    let state = sim.state();
    log::info!(
        "Finished: phase {:?}, score {}, scroll {:.1}, carrot slots {}",
        state.phase,
        state.score,
        state.camera.scroll_y(),
        state.collectibles.len()
    );
    println!("{}", arcade.score_text);
}
