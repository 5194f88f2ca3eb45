//! Host boundary
//!
//! The physics/render host integrates bodies, reports contacts and draws.
//! [`Simulation`] owns the run and drives one frame at a time:
//! snapshot the host, tick, then hand the queued commands back.

use crate::sim::{GamePhase, GameState, TickInput, tick};

pub use crate::sim::{HostCommand, PhysicsSnapshot, Touching};

/// Capabilities the simulation needs from a physics/render host
pub trait Host {
    /// Physics state after this frame's integration step
    fn snapshot(&mut self) -> PhysicsSnapshot;

    /// Apply one command issued by the simulation
    fn apply(&mut self, command: HostCommand);
}

/// Owns the game state for a whole session, across restarts
pub struct Simulation {
    state: GameState,
}

impl Simulation {
    /// Construct a session. The level is not built until [`Simulation::create`].
    pub fn new(seed: u64) -> Self {
        log::info!("Simulation constructed with seed {}", seed);
        Self {
            state: GameState::new(seed),
        }
    }

    /// Build the level and push its initial layout to the host
    pub fn create(&mut self, host: &mut impl Host) {
        self.state.create();
        self.flush(host);
    }

    /// Run one frame. Does nothing until the level is created.
    pub fn frame(&mut self, host: &mut impl Host, input: &TickInput) {
        if self.state.phase == GamePhase::Booting {
            return;
        }
        let physics = host.snapshot();
        tick(&mut self.state, input, &physics);
        self.flush(host);
    }

    /// Start a fresh run. Only call between frames.
    pub fn restart(&mut self, host: &mut impl Host) {
        log::info!("Restarting after {} carrots", self.state.score);
        self.state.reset();
        self.flush(host);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn is_game_over(&self) -> bool {
        self.state.phase == GamePhase::GameOver
    }

    fn flush(&mut self, host: &mut impl Host) {
        for command in self.state.take_commands() {
            host.apply(command);
        }
    }
}
