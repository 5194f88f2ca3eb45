//! Platform layout and recycling
//!
//! Five static platforms make an endless level: whichever one scrolls out
//! below the view is lifted to just above the frontier, with a carrot on it.

use rand::Rng;

use super::collect::spawn_above;
use super::pool::CollectiblePool;
use super::state::{HostCommand, Platform};
use crate::consts::*;

/// Initial layout: one platform every `PLATFORM_SPACING` down from y = 0
pub fn seed_platforms<R: Rng>(rng: &mut R) -> [Platform; PLATFORM_COUNT] {
    std::array::from_fn(|i| {
        let x = rng.random_range(PLATFORM_MIN_X..=PLATFORM_MAX_X) as f32;
        Platform::at(x, PLATFORM_SPACING * i as f32)
    })
}

/// Whether a platform has scrolled past the bottom of the play area
#[inline]
pub fn needs_recycle(platform: &Platform, scroll_y: f32) -> bool {
    platform.pos.y >= scroll_y + RECYCLE_MARGIN
}

/// Lift every out-of-view platform above the frontier and put a carrot on it.
///
/// Returns how many platforms were recycled.
pub fn recycle_platforms<R: Rng>(
    platforms: &mut [Platform],
    collectibles: &mut CollectiblePool,
    scroll_y: f32,
    rng: &mut R,
    commands: &mut Vec<HostCommand>,
) -> usize {
    let mut recycled = 0;

    for (index, platform) in platforms.iter_mut().enumerate() {
        if !needs_recycle(platform, scroll_y) {
            continue;
        }

        // Gap in (min, max]: the frontier line itself is never used
        let gap = rng.random_range(RECYCLE_GAP_MIN + 1..=RECYCLE_GAP_MAX) as f32;
        platform.pos.y = scroll_y - gap;
        commands.push(HostCommand::MovePlatform {
            index,
            pos: platform.pos,
        });
        log::debug!("Recycled platform {} to y={}", index, platform.pos.y);

        spawn_above(platform, collectibles, commands);
        recycled += 1;
    }

    recycled
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn seeded_row() -> [Platform; PLATFORM_COUNT] {
        std::array::from_fn(|i| Platform::at(100.0 + i as f32, 150.0 * i as f32))
    }

    #[test]
    fn test_seed_layout() {
        let mut rng = Pcg32::seed_from_u64(3);
        let platforms = seed_platforms(&mut rng);
        for (i, p) in platforms.iter().enumerate() {
            assert_eq!(p.pos.y, 150.0 * i as f32);
            assert!(p.pos.x >= 80.0 && p.pos.x <= 400.0);
            assert_eq!(p.pos.x.fract(), 0.0);
        }
    }

    #[test]
    fn test_platform_at_margin_recycles() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut pool = CollectiblePool::with_capacity(4);
        let mut commands = Vec::new();
        let mut platforms = [Platform::at(240.0, 700.0)];

        let n = recycle_platforms(&mut platforms, &mut pool, 0.0, &mut rng, &mut commands);

        assert_eq!(n, 1);
        let y = platforms[0].pos.y;
        assert!((-80.0..-50.0).contains(&y), "recycled to {}", y);
        assert_eq!(platforms[0].pos.x, 240.0);
        assert_eq!(platforms[0].size, PLATFORM_SIZE);

        let active: Vec<_> = pool.iter_active().collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].1.pos, Vec2::new(240.0, y - PLATFORM_SIZE.y));
    }

    #[test]
    fn test_gap_bounds_over_many_seeds() {
        let mut lowest_seen = f32::MAX;
        let mut highest_seen = f32::MIN;
        for seed in 0..2000 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut pool = CollectiblePool::with_capacity(1);
            let mut commands = Vec::new();
            let mut platforms = [Platform::at(240.0, 700.0)];

            recycle_platforms(&mut platforms, &mut pool, 0.0, &mut rng, &mut commands);

            let y = platforms[0].pos.y;
            assert!((-80.0..-50.0).contains(&y), "seed {} recycled to {}", seed, y);
            lowest_seen = lowest_seen.min(y);
            highest_seen = highest_seen.max(y);
        }
        assert_eq!(lowest_seen, -80.0);
        assert_eq!(highest_seen, -51.0);
    }

    #[test]
    fn test_visible_platforms_stay() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut pool = CollectiblePool::with_capacity(4);
        let mut commands = Vec::new();
        let mut platforms = seeded_row();
        let before = platforms;

        let n = recycle_platforms(&mut platforms, &mut pool, 0.0, &mut rng, &mut commands);

        assert_eq!(n, 0);
        assert_eq!(platforms, before);
        assert!(commands.is_empty());
        assert_eq!(pool.active_count(), 0);
    }

    proptest! {
        #[test]
        fn recycled_platform_lands_in_gap(
            seed: u64,
            scroll_y in -100_000.0f32..0.0,
            below in 0.0f32..2000.0,
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut pool = CollectiblePool::with_capacity(2);
            let mut commands = Vec::new();
            let mut platforms = seeded_row();
            platforms[2].pos.y = scroll_y + RECYCLE_MARGIN + below;

            let n = recycle_platforms(&mut platforms, &mut pool, scroll_y, &mut rng, &mut commands);

            prop_assert!(n >= 1);
            prop_assert_eq!(platforms.len(), PLATFORM_COUNT);
            let y = platforms[2].pos.y;
            prop_assert!(y >= scroll_y - 80.0 && y < scroll_y - 50.0);
            prop_assert_eq!(pool.active_count(), n);
        }
    }
}
