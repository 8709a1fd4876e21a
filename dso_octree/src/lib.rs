/*!
# DSO Octree

Static spatial index for deep-sky object catalogs.

This crate answers two per-frame questions about a catalog of galaxies,
nebulae and clusters:

- which objects are visible from a viewpoint, given an infinite five-plane
  view frustum and a limiting apparent magnitude;
- which objects lie within a physical radius of a point.

## Architecture

- **OctreeBuilder**: builds a `StaticOctree` once from a flat catalog
- **StaticOctree**: immutable 8-way tree over f64 positions, one flat
  pre-order object array
- **ObjectHandler**: caller-supplied callback invoked once per selected object
- **ViewFrustum**: five inward-facing planes built from a camera pose
- **astro**: apparent/absolute magnitude conversions

Traversals are synchronous and lock-free; any number of threads may query
the same tree.
*/

// Internal modules
mod error;
pub mod astro;
pub mod camera;
pub mod log;
pub mod octree;

// Main dso namespace module
pub mod dso {
    // Error types
    pub use crate::error::{Error, Result};

    // Magnitude conversions
    pub use crate::astro::{abs_to_app_mag, app_to_abs_mag, LY_PER_PARSEC, NEAR_FIELD_DISTANCE};

    // Logging sub-module (types and functions, NOT macros)
    pub mod log {
        pub use crate::log::{
            reset_logger, set_logger, set_min_severity, min_severity,
            DefaultLogger, LogEntry, LogSeverity, Logger,
        };
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Octree sub-module
    pub mod octree {
        pub use crate::octree::*;
    }
}

pub use error::{Error, Result};

// Re-export math library at crate root
pub use glam;
