//! Synthetic deep-sky catalog.
//!
//! A uniform field of galaxies plus a handful of bright neighbours close to
//! the origin, so both query kinds have something to find.

use dso_octree::dso::octree::CatalogObject;
use dso_octree::glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of bright galaxies placed near the origin.
const NEIGHBOUR_COUNT: u32 = 12;

/// Neighbours lie within this distance of the origin (light years).
const NEIGHBOUR_EXTENT: f64 = 3.0e6;

/// Generate `count` galaxies inside a cube of half-width `extent` light years.
pub fn generate(count: u32, extent: f64, seed: u64) -> Vec<CatalogObject> {
    let mut rng = StdRng::seed_from_u64(seed);
    let neighbours = NEIGHBOUR_COUNT.min(count);

    let mut objects = Vec::with_capacity(count as usize);
    for number in 0..count {
        let reach = if number < neighbours { NEIGHBOUR_EXTENT } else { extent };
        let position = DVec3::new(
            rng.random_range(-reach..reach),
            rng.random_range(-reach..reach),
            rng.random_range(-reach..reach),
        );
        let absolute_magnitude = if number < neighbours {
            rng.random_range(-22.0f32..-18.0)
        } else {
            rng.random_range(-23.0f32..-13.0)
        };
        // 3e3 to 1.5e5 ly across
        let radius = 10f64.powf(rng.random_range(3.2..4.9));
        objects.push(CatalogObject::new(number, position, absolute_magnitude, radius));
    }
    objects
}
