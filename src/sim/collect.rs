//! Carrot spawning and collection

use glam::Vec2;

use super::pool::{CollectibleId, CollectiblePool};
use super::state::{HostCommand, Platform, SoundCue};

/// Place one carrot directly above `platform`
pub fn spawn_above(
    platform: &Platform,
    collectibles: &mut CollectiblePool,
    commands: &mut Vec<HostCommand>,
) -> CollectibleId {
    let pos = Vec2::new(platform.pos.x, platform.pos.y - platform.height());
    let id = collectibles.acquire(pos);
    commands.push(HostCommand::SpawnCollectible { id, pos });
    log::debug!("Carrot {:?} spawned at ({}, {})", id, pos.x, pos.y);
    id
}

/// Handle a player/carrot overlap.
///
/// Returns true if the carrot was live and has now been collected. Overlaps
/// on carrots that are already gone (or ids from a previous spawn) do nothing.
pub fn collect(
    id: CollectibleId,
    collectibles: &mut CollectiblePool,
    score: &mut u64,
    commands: &mut Vec<HostCommand>,
) -> bool {
    if !collectibles.release(id) {
        log::warn!("Ignoring overlap with inactive carrot {:?}", id);
        return false;
    }
    if let Some(carrot) = collectibles.get_mut(id) {
        carrot.collected = true;
    }

    *score += 1;
    commands.push(HostCommand::DespawnCollectible { id });
    commands.push(HostCommand::PlaySound(SoundCue::CarrotCollected));
    commands.push(HostCommand::SetScoreText(format!("Carrots: {}", score)));
    log::debug!("Carrot {:?} collected, score {}", id, score);
    true
}
