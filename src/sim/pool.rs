//! Carrot pool
//!
//! A slot arena with a first-free allocator: spawning reuses the lowest
//! inactive slot and only grows the arena when every slot is live.
//! Ids carry a generation so a stale id never reaches a reused slot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::COLLECTIBLE_SIZE;

/// Handle to a pooled carrot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectibleId {
    pub index: u32,
    pub generation: u32,
}

/// A carrot sitting above a recycled platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: Vec2,
    /// Participates in overlap checks
    pub active: bool,
    pub visible: bool,
    pub collected: bool,
    generation: u32,
}

impl Collectible {
    fn dormant() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: COLLECTIBLE_SIZE,
            active: false,
            visible: false,
            collected: false,
            generation: 0,
        }
    }

    /// Free slots are both inactive and hidden
    fn is_free(&self) -> bool {
        !self.active && !self.visible
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.visible = false;
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollectiblePool {
    slots: Vec<Collectible>,
}

impl CollectiblePool {
    /// Pool with `capacity` dormant slots ready for reuse
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| Collectible::dormant()).collect(),
        }
    }

    /// Total slots, live or not
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|c| c.active).count()
    }

    /// Take the first free slot (or grow) and make it live at `pos`
    pub fn acquire(&mut self, pos: Vec2) -> CollectibleId {
        let index = match self.slots.iter().position(Collectible::is_free) {
            Some(i) => i,
            None => {
                self.slots.push(Collectible::dormant());
                log::debug!("Carrot pool grew to {} slots", self.slots.len());
                self.slots.len() - 1
            }
        };

        let slot = &mut self.slots[index];
        slot.generation = slot.generation.wrapping_add(1);
        slot.pos = pos;
        slot.active = true;
        slot.visible = true;
        slot.collected = false;

        CollectibleId {
            index: index as u32,
            generation: slot.generation,
        }
    }

    pub fn get(&self, id: CollectibleId) -> Option<&Collectible> {
        self.slots
            .get(id.index as usize)
            .filter(|c| c.generation == id.generation)
    }

    pub fn get_mut(&mut self, id: CollectibleId) -> Option<&mut Collectible> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|c| c.generation == id.generation)
    }

    /// Hide and disable a live carrot. Returns false if it was not live.
    pub fn release(&mut self, id: CollectibleId) -> bool {
        match self.get_mut(id) {
            Some(slot) if slot.active => {
                slot.deactivate();
                true
            }
            _ => false,
        }
    }

    /// Release every live carrot, returning their ids
    pub fn clear(&mut self) -> Vec<CollectibleId> {
        let mut released = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.active || slot.visible {
                slot.deactivate();
                released.push(CollectibleId {
                    index: index as u32,
                    generation: slot.generation,
                });
            }
        }
        released
    }

    /// Live carrots with their ids
    pub fn iter_active(&self) -> impl Iterator<Item = (CollectibleId, &Collectible)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, c)| c.active)
            .map(|(index, c)| {
                (
                    CollectibleId {
                        index: index as u32,
                        generation: c.generation,
                    },
                    c,
                )
            })
    }
}
