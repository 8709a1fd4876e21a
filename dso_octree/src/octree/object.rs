//! Catalog objects stored in the octree.
//!
//! The octree only needs three read-only properties from an object: where it
//! is, how bright it is intrinsically, and how large it is. Everything else
//! (names, types, descriptions) stays with the caller's record type.

use std::sync::Arc;
use glam::DVec3;

/// Read-only view of a deep-sky object as seen by the octree.
pub trait OctreeObject {
    /// Position in world space (light years)
    fn position(&self) -> DVec3;

    /// Absolute magnitude (lower = brighter)
    fn absolute_magnitude(&self) -> f32;

    /// Radius of the bounding sphere around `position()` (light years)
    fn bounding_radius(&self) -> f64;
}

impl<T: OctreeObject + ?Sized> OctreeObject for &T {
    #[inline]
    fn position(&self) -> DVec3 {
        (**self).position()
    }

    #[inline]
    fn absolute_magnitude(&self) -> f32 {
        (**self).absolute_magnitude()
    }

    #[inline]
    fn bounding_radius(&self) -> f64 {
        (**self).bounding_radius()
    }
}

impl<T: OctreeObject + ?Sized> OctreeObject for Arc<T> {
    #[inline]
    fn position(&self) -> DVec3 {
        (**self).position()
    }

    #[inline]
    fn absolute_magnitude(&self) -> f32 {
        (**self).absolute_magnitude()
    }

    #[inline]
    fn bounding_radius(&self) -> f64 {
        (**self).bounding_radius()
    }
}

/// Minimal catalog record.
///
/// Carries a catalog number so query results can be matched back to the
/// caller's own data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogObject {
    /// Caller-defined identifier
    pub catalog_number: u32,
    /// Position in world space (light years)
    pub position: DVec3,
    /// Absolute magnitude
    pub absolute_magnitude: f32,
    /// Bounding sphere radius (light years)
    pub bounding_radius: f64,
}

impl CatalogObject {
    pub fn new(
        catalog_number: u32,
        position: DVec3,
        absolute_magnitude: f32,
        bounding_radius: f64,
    ) -> Self {
        Self {
            catalog_number,
            position,
            absolute_magnitude,
            bounding_radius,
        }
    }

    /// Point-like object (zero bounding radius).
    pub fn point(catalog_number: u32, position: DVec3, absolute_magnitude: f32) -> Self {
        Self::new(catalog_number, position, absolute_magnitude, 0.0)
    }
}

impl OctreeObject for CatalogObject {
    #[inline]
    fn position(&self) -> DVec3 {
        self.position
    }

    #[inline]
    fn absolute_magnitude(&self) -> f32 {
        self.absolute_magnitude
    }

    #[inline]
    fn bounding_radius(&self) -> f64 {
        self.bounding_radius
    }
}
