//! Headless arcade-physics host
//!
//! A minimal stand-in for the real physics/render host: gravity, Euler
//! integration, one-way (land from above) platform contact and AABB
//! overlap between the player and carrots. Rendering and audio are
//! reduced to recorded state so runs can be inspected and tested.

use glam::Vec2;

use crate::consts::*;
use crate::host::{Host, HostCommand, PhysicsSnapshot, Touching};
use crate::sim::{CollectibleId, PlayerPose, Scene, SoundCue};

/// An axis-aligned body, positioned by its centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Takes part in collision and overlap checks
    pub enabled: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            enabled: true,
        }
    }

    #[inline]
    fn half(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    fn bottom(&self) -> f32 {
        self.pos.y + self.half().y
    }

    #[inline]
    fn top(&self) -> f32 {
        self.pos.y - self.half().y
    }

    pub fn overlaps(&self, other: &Body) -> bool {
        let d = (self.pos - other.pos).abs();
        let reach = self.half() + other.half();
        d.x < reach.x && d.y < reach.y
    }

    fn overlaps_x(&self, other: &Body) -> bool {
        (self.pos.x - other.pos.x).abs() < self.half().x + other.half().x
    }
}

/// Integrate a dynamic body one step and land it on the first platform it
/// crossed from above. Returns true when it landed.
fn integrate(body: &mut Body, platforms: &[Body], gravity: f32, dt: f32) -> bool {
    let prev_bottom = body.bottom();
    body.vel.y += gravity * dt;
    body.pos += body.vel * dt;

    if body.vel.y < 0.0 {
        return false;
    }

    for platform in platforms {
        let top = platform.top();
        if prev_bottom <= top && body.bottom() >= top && body.overlaps_x(platform) {
            body.pos.y = top - body.half().y;
            body.vel.y = 0.0;
            return true;
        }
    }
    false
}

#[derive(Debug, Clone)]
pub struct HeadlessArcade {
    pub gravity: f32,
    pub player: Body,
    pub platforms: Vec<Body>,
    /// Carrot bodies indexed by pool slot
    pub carrots: Vec<Option<(CollectibleId, Body)>>,
    pub pose: PlayerPose,
    pub score_text: String,
    pub scene: Scene,
    /// Scene switches actually performed (repeat requests are ignored)
    pub scene_changes: u32,
    /// Cues played at a non-zero volume
    pub sounds: Vec<SoundCue>,
    pub volume: f32,
    touching: Touching,
}

impl Default for HeadlessArcade {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessArcade {
    pub fn new() -> Self {
        Self {
            gravity: GRAVITY,
            player: Body::new(PLAYER_START, PLAYER_SIZE),
            platforms: vec![Body::new(Vec2::ZERO, PLATFORM_SIZE); PLATFORM_COUNT],
            carrots: Vec::new(),
            pose: PlayerPose::Standing,
            score_text: String::new(),
            scene: Scene::Main,
            scene_changes: 0,
            sounds: Vec::new(),
            volume: 1.0,
            touching: Touching::default(),
        }
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    /// Advance physics by `dt` seconds. Call before each simulation frame.
    pub fn step(&mut self, dt: f32) {
        let landed = integrate(&mut self.player, &self.platforms, self.gravity, dt);
        self.touching = Touching {
            down: landed,
            ..Default::default()
        };

        for (_, carrot) in self.carrots.iter_mut().flatten() {
            if carrot.enabled {
                integrate(carrot, &self.platforms, self.gravity, dt);
            }
        }
    }

    /// Carrots currently enabled and drawn
    pub fn live_carrots(&self) -> usize {
        self.carrots
            .iter()
            .flatten()
            .filter(|(_, body)| body.enabled)
            .count()
    }

    fn carrot_slot(&mut self, id: CollectibleId) -> &mut Option<(CollectibleId, Body)> {
        let index = id.index as usize;
        if self.carrots.len() <= index {
            self.carrots.resize(index + 1, None);
        }
        &mut self.carrots[index]
    }
}

impl Host for HeadlessArcade {
    fn snapshot(&mut self) -> PhysicsSnapshot {
        let overlaps = self
            .carrots
            .iter()
            .flatten()
            .filter(|(_, body)| body.enabled && body.overlaps(&self.player))
            .map(|(id, _)| *id)
            .collect();

        PhysicsSnapshot {
            player_pos: self.player.pos,
            player_vel: self.player.vel,
            touching: self.touching,
            overlaps,
        }
    }

    fn apply(&mut self, command: HostCommand) {
        match command {
            HostCommand::SetPlayerVelocity(vel) => self.player.vel = vel,
            HostCommand::SetPlayerPosition(pos) => self.player.pos = pos,
            HostCommand::SetPlayerPose(pose) => self.pose = pose,
            HostCommand::MovePlatform { index, pos } => match self.platforms.get_mut(index) {
                Some(platform) => platform.pos = pos,
                None => log::warn!("Unknown platform {}", index),
            },
            HostCommand::SpawnCollectible { id, pos } => {
                *self.carrot_slot(id) = Some((id, Body::new(pos, COLLECTIBLE_SIZE)));
            }
            HostCommand::DespawnCollectible { id } => {
                match self.carrots.get_mut(id.index as usize) {
                    Some(Some((current, body))) if *current == id => body.enabled = false,
                    _ => log::warn!("Despawn for unknown carrot {:?}", id),
                }
            }
            HostCommand::PlaySound(cue) => {
                if self.volume > 0.0 {
                    log::debug!("Sound '{}' at {:.2}", cue.as_str(), self.volume);
                    self.sounds.push(cue);
                }
            }
            HostCommand::SetScoreText(text) => self.score_text = text,
            HostCommand::StartScene(scene) => {
                if scene != self.scene {
                    log::info!("Scene -> {}", scene.as_str());
                    self.scene = scene;
                    self.scene_changes += 1;
                }
            }
        }
    }
}
