//! Per-frame simulation tick
//!
//! Runs the gameplay systems in a fixed order against a snapshot of the
//! host's physics state. The host integrates gravity and velocity before
//! the snapshot is taken and applies the queued commands afterwards.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collect::collect;
use super::game_over::has_fallen;
use super::player::control_player;
use super::pool::CollectibleId;
use super::recycler::recycle_platforms;
use super::state::{GamePhase, GameState, HostCommand, Scene, Touching};

/// Input sampled at the start of a tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// World x of the held pointer, if any
    pub pointer: Option<f32>,
}

/// Physics state reported by the host for this tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicsSnapshot {
    pub player_pos: Vec2,
    pub player_vel: Vec2,
    pub touching: Touching,
    /// Carrots the player overlaps this tick, in report order
    pub overlaps: Vec<CollectibleId>,
}

/// Advance the run by one host frame
pub fn tick(state: &mut GameState, input: &TickInput, physics: &PhysicsSnapshot) {
    // Nothing to drive before setup, and nothing left after the fall
    match state.phase {
        GamePhase::Booting | GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    state.player.pos = physics.player_pos;
    state.player.vel = physics.player_vel;
    state.player.touching = physics.touching;

    let world_width = state.camera.viewport.x;
    control_player(&mut state.player, input, world_width, &mut state.commands);

    state.camera.follow(state.player.pos);

    recycle_platforms(
        &mut state.platforms,
        &mut state.collectibles,
        state.camera.scroll_y(),
        &mut state.rng,
        &mut state.commands,
    );

    for &id in &physics.overlaps {
        collect(id, &mut state.collectibles, &mut state.score, &mut state.commands);
    }

    if has_fallen(state.player.pos.y, &state.platforms) {
        state.phase = GamePhase::GameOver;
        state.commands.push(HostCommand::StartScene(Scene::GameOver));
        log::info!(
            "Game over after {} ticks with {} carrots",
            state.time_ticks,
            state.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Platform, PlayerPose, SoundCue};
    use proptest::prelude::*;

    /// Playing state with the documented row of platforms
    fn playing_state() -> GameState {
        let mut state = GameState::new(12345);
        state.create();
        state.platforms = std::array::from_fn(|i| Platform::at(240.0, 150.0 * i as f32));
        state.take_commands();
        state
    }

    fn at_rest() -> PhysicsSnapshot {
        PhysicsSnapshot {
            player_pos: PLAYER_START,
            ..Default::default()
        }
    }

    #[test]
    fn test_booting_state_ignores_ticks() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default(), &at_rest());
        assert_eq!(state.time_ticks, 0);
        assert!(state.commands().is_empty());
    }

    #[test]
    fn test_first_bounce() {
        let mut state = playing_state();
        let physics = PhysicsSnapshot {
            touching: Touching {
                down: true,
                ..Default::default()
            },
            ..at_rest()
        };

        tick(&mut state, &TickInput::default(), &physics);

        assert_eq!(state.player.pose, PlayerPose::Jumping);
        assert_eq!(state.player.vel, Vec2::new(0.0, -JUMP_IMPULSE));
        let commands = state.take_commands();
        assert!(commands.contains(&HostCommand::PlaySound(SoundCue::Jump)));
        assert!(commands.contains(&HostCommand::SetPlayerVelocity(Vec2::new(0.0, -320.0))));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_recycle_spawns_carrot() {
        let mut state = playing_state();
        // Player high enough that the bottom platform is out of view
        let physics = PhysicsSnapshot {
            player_pos: Vec2::new(240.0, 220.0),
            ..Default::default()
        };

        tick(&mut state, &TickInput::default(), &physics);

        // scroll_y = 220 - 320 = -100; platform at 600 is at the margin
        let scroll_y = state.camera.scroll_y();
        assert_eq!(scroll_y, -100.0);
        let moved = state.platforms[4].pos.y;
        assert!(moved >= scroll_y - 80.0 && moved < scroll_y - 50.0);
        assert_eq!(state.platforms.len(), PLATFORM_COUNT);

        let carrots: Vec<_> = state.collectibles.iter_active().collect();
        assert_eq!(carrots.len(), 1);
        assert_eq!(carrots[0].1.pos, Vec2::new(240.0, moved - PLATFORM_SIZE.y));
    }

    #[test]
    fn test_overlap_collects_once() {
        let mut state = playing_state();
        let id = state.collectibles.acquire(PLAYER_START);
        let physics = PhysicsSnapshot {
            overlaps: vec![id, id],
            ..at_rest()
        };

        tick(&mut state, &TickInput::default(), &physics);
        assert_eq!(state.score, 1);
        assert!(!state.collectible_active(id));

        tick(&mut state, &TickInput::default(), &physics);
        assert_eq!(state.score, 1);
        let commands = state.take_commands();
        let collected = commands
            .iter()
            .filter(|c| **c == HostCommand::PlaySound(SoundCue::CarrotCollected))
            .count();
        assert_eq!(collected, 1);
    }

    #[test]
    fn test_game_over_boundary() {
        // Lowest platform at 600: 800 is still alive
        let mut state = playing_state();
        let physics = PhysicsSnapshot {
            player_pos: Vec2::new(240.0, 800.0),
            player_vel: Vec2::new(0.0, 100.0),
            ..Default::default()
        };
        tick(&mut state, &TickInput::default(), &physics);
        assert_eq!(state.phase, GamePhase::Playing);

        let mut state = playing_state();
        let physics = PhysicsSnapshot {
            player_pos: Vec2::new(240.0, 801.0),
            player_vel: Vec2::new(0.0, 100.0),
            ..Default::default()
        };
        tick(&mut state, &TickInput::default(), &physics);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_game_over_signals_once() {
        let mut state = playing_state();
        let physics = PhysicsSnapshot {
            player_pos: Vec2::new(240.0, 5000.0),
            ..Default::default()
        };
        for _ in 0..3 {
            tick(&mut state, &TickInput::default(), &physics);
        }
        let transitions = state
            .take_commands()
            .into_iter()
            .filter(|c| *c == HostCommand::StartScene(Scene::GameOver))
            .count();
        assert_eq!(transitions, 1);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        state1.create();
        state2.create();

        let mut y = 320.0;
        for i in 0..200 {
            y -= 4.0;
            let physics = PhysicsSnapshot {
                player_pos: Vec2::new(240.0, y),
                player_vel: Vec2::new(0.0, -100.0),
                ..Default::default()
            };
            let input = TickInput {
                left: i % 3 == 0,
                ..Default::default()
            };
            tick(&mut state1, &input, &physics);
            tick(&mut state2, &input, &physics);
        }

        assert_eq!(state1.platforms, state2.platforms);
        assert_eq!(state1.take_commands(), state2.take_commands());
    }

    proptest! {
        #[test]
        fn platforms_stay_in_play_area(steps in prop::collection::vec(-30.0f32..10.0, 1..300)) {
            let mut state = GameState::new(4242);
            state.create();
            state.take_commands();
            let mut y = PLAYER_START.y;
            let mut spawned = 0;

            for dy in steps {
                y += dy;
                let physics = PhysicsSnapshot {
                    player_pos: Vec2::new(240.0, y),
                    player_vel: Vec2::new(0.0, dy),
                    ..Default::default()
                };
                tick(&mut state, &TickInput::default(), &physics);
                if state.phase != GamePhase::Playing {
                    break;
                }

                let scroll_y = state.camera.scroll_y();
                prop_assert_eq!(state.platforms.len(), PLATFORM_COUNT);
                for platform in &state.platforms {
                    prop_assert!(platform.pos.y < scroll_y + RECYCLE_MARGIN);
                }

                let commands = state.take_commands();
                let moved = commands
                    .iter()
                    .filter(|c| matches!(c, HostCommand::MovePlatform { .. }))
                    .count();
                let carrots = commands
                    .iter()
                    .filter(|c| matches!(c, HostCommand::SpawnCollectible { .. }))
                    .count();
                prop_assert_eq!(moved, carrots);
                spawned += carrots;
            }

            prop_assert_eq!(state.collectibles.active_count(), spawned);
        }
    }
}
