//! Game state and core simulation types
//!
//! Everything one run owns lives in [`GameState`]; the host only ever sees
//! copies of positions through [`HostCommand`]s.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::pool::{CollectibleId, CollectiblePool};
use super::recycler::seed_platforms;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed but not set up yet; ticks are ignored
    Booting,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for a restart
    GameOver,
}

/// Player visual pose
///
/// `Jumping` is shown on the bounce and while rising, `Standing` while
/// falling. Players read the switch as the "about to land" tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerPose {
    #[default]
    Standing,
    Jumping,
}

impl PlayerPose {
    /// Texture key the host draws for this pose
    pub fn texture(&self) -> &'static str {
        match self {
            PlayerPose::Standing => "bunny-stand",
            PlayerPose::Jumping => "bunny-jump",
        }
    }
}

/// Named sound cues handed to the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    Jump,
    CarrotCollected,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Jump => "jump",
            SoundCue::CarrotCollected => "carrot-collected",
        }
    }
}

/// Scenes the host can switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    Main,
    GameOver,
}

impl Scene {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scene::Main => "mainScene",
            Scene::GameOver => "game-over",
        }
    }
}

/// Contact flags reported by the host for the player body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Touching {
    pub down: bool,
    /// Edge checks are disabled for the player; kept for completeness of the report
    pub left: bool,
    pub right: bool,
}

/// Commands issued to the physics/render host after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostCommand {
    SetPlayerVelocity(Vec2),
    SetPlayerPosition(Vec2),
    SetPlayerPose(PlayerPose),
    /// Platform repositioned; the host must refresh its static body
    MovePlatform { index: usize, pos: Vec2 },
    /// Carrot placed, shown and enabled for collision
    SpawnCollectible { id: CollectibleId, pos: Vec2 },
    /// Carrot hidden and removed from collision
    DespawnCollectible { id: CollectibleId },
    PlaySound(SoundCue),
    SetScoreText(String),
    StartScene(Scene),
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub pose: PlayerPose,
    pub touching: Touching,
    /// World x where the current pointer drag started
    pub drag_anchor: Option<f32>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: PLAYER_START,
            vel: Vec2::ZERO,
            size: PLAYER_SIZE,
            pose: PlayerPose::Standing,
            touching: Touching::default(),
            drag_anchor: None,
        }
    }
}

impl Player {
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.size.x * 0.5
    }
}

/// A static platform. Only the recycler moves it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Default for Platform {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: PLATFORM_SIZE,
        }
    }
}

impl Platform {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            ..Default::default()
        }
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Restarts performed so far (mixed into the seed on reset)
    pub restarts: u32,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Carrots collected
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub platforms: [Platform; PLATFORM_COUNT],
    pub collectibles: CollectiblePool,
    pub camera: Camera,
    /// Pending host commands, drained once per frame
    pub(super) commands: Vec<HostCommand>,
}

impl GameState {
    /// Construct an empty run. Nothing ticks until [`GameState::create`].
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            restarts: 0,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Booting,
            score: 0,
            time_ticks: 0,
            player: Player::default(),
            platforms: [Platform::default(); PLATFORM_COUNT],
            collectibles: CollectiblePool::with_capacity(COLLECTIBLE_CAPACITY),
            camera: Camera::new(VIEWPORT),
            commands: Vec::new(),
        }
    }

    /// Lay out the level and start playing
    pub fn create(&mut self) {
        self.platforms = seed_platforms(&mut self.rng);
        for (index, platform) in self.platforms.iter().enumerate() {
            self.commands.push(HostCommand::MovePlatform {
                index,
                pos: platform.pos,
            });
        }

        self.player = Player::default();
        self.commands.push(HostCommand::SetPlayerPosition(self.player.pos));
        self.commands.push(HostCommand::SetPlayerVelocity(self.player.vel));
        self.commands.push(HostCommand::SetPlayerPose(self.player.pose));

        self.camera.follow(self.player.pos);
        self.score = 0;
        self.commands.push(HostCommand::SetScoreText(self.score_text()));
        self.phase = GamePhase::Playing;

        log::info!(
            "Level created (seed {}, restart {})",
            self.seed,
            self.restarts
        );
    }

    /// Full reset between ticks, then set the level up again
    pub fn reset(&mut self) {
        self.restarts += 1;
        self.rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.restarts as u64));
        self.time_ticks = 0;
        for id in self.collectibles.clear() {
            self.commands.push(HostCommand::DespawnCollectible { id });
        }
        self.camera = Camera::new(self.camera.viewport);
        self.commands.push(HostCommand::StartScene(Scene::Main));
        self.create();
    }

    /// Displayed score text
    pub fn score_text(&self) -> String {
        format!("Carrots: {}", self.score)
    }

    /// Commands queued since the last drain
    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Take all queued commands, leaving the queue empty
    pub fn take_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Whether a given collectible is still live
    pub fn collectible_active(&self, id: CollectibleId) -> bool {
        self.collectibles.get(id).is_some_and(|c| c.active)
    }
}
