//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host physics arrives as a snapshot, host effects leave as commands
//! - Seeded RNG only
//! - Fixed system order within a tick
//! - No rendering, audio or platform dependencies

pub mod camera;
pub mod collect;
pub mod game_over;
pub mod player;
pub mod pool;
pub mod recycler;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collect::{collect, spawn_above};
pub use game_over::{has_fallen, lowest_platform};
pub use player::control_player;
pub use pool::{Collectible, CollectibleId, CollectiblePool};
pub use recycler::{needs_recycle, recycle_platforms, seed_platforms};
pub use state::{
    GamePhase, GameState, HostCommand, Platform, Player, PlayerPose, Scene, SoundCue, Touching,
};
pub use tick::{PhysicsSnapshot, TickInput, tick};
