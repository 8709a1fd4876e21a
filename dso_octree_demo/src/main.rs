//! DSO octree demo
//!
//! Builds an octree over a synthetic galaxy catalog, then runs a visibility
//! query, a proximity query and a parallel batch of cube-face views.
//!
//! Run with: `RUST_LOG=debug cargo run --release -p dso_octree_demo -- --count 200000`

mod catalog;
mod log_bridge;

use clap::Parser;
use dso_octree::dso::camera::ViewFrustum;
use dso_octree::dso::octree::{OctreeBuilder, OctreeConfig, VisibilityQuery};
use dso_octree::dso::{self, abs_to_app_mag};
use dso_octree::glam::{DQuat, DVec3};
use log::info;

use log_bridge::LogBridge;

/// How many of the brightest visible objects are listed.
const BRIGHTEST_SHOWN: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "dso_octree_demo", about = "Query a DSO octree built over a synthetic catalog")]
struct Args {
    /// Number of objects in the synthetic catalog
    #[arg(long, default_value_t = 50_000)]
    count: u32,

    /// Random seed for the catalog
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Half-width of the catalog volume in light years
    #[arg(long, default_value_t = 1.0e9)]
    extent: f64,

    /// Limiting apparent magnitude of the visibility queries
    #[arg(long, default_value_t = 12.0)]
    limit: f32,

    /// Radius of the proximity query in light years
    #[arg(long, default_value_t = 5.0e6)]
    radius: f64,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 45.0)]
    fov: f64,

    /// Absolute magnitude threshold of the root node
    #[arg(long, default_value_t = -21.0, allow_negative_numbers = true)]
    root_magnitude: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    dso::log::set_logger(LogBridge);
    dso::log::set_min_severity(log_bridge::min_severity_for(log::max_level()));

    let args = Args::parse();
    if !(args.fov > 0.0 && args.fov < 180.0) {
        return Err(format!("--fov must be in (0, 180), got {}", args.fov).into());
    }

    let objects = catalog::generate(args.count, args.extent, args.seed);
    info!("Generated {} objects (seed {})", objects.len(), args.seed);

    let config = OctreeConfig::fitted(&objects).with_root_magnitude(args.root_magnitude);
    let tree = OctreeBuilder::new(config).build(objects)?;

    let stats = tree.stats();
    info!(
        "Tree: {} nodes, {} leaves, depth {}, {:.1} objects per leaf, {} at the root",
        stats.node_count,
        stats.leaf_count,
        stats.max_depth,
        stats.objects_per_leaf(),
        stats.root_object_count
    );

    let observer = DVec3::ZERO;
    let fov_y = args.fov.to_radians();

    // Looking down -Z from the origin
    let frustum = ViewFrustum::new(observer, DQuat::IDENTITY, fov_y, 16.0 / 9.0);
    let mut visible = tree.collect_visible(observer, frustum.planes(), args.limit);
    info!("{} objects visible brighter than magnitude {}", visible.len(), args.limit);

    visible.sort_by(|a, b| {
        let a_mag = abs_to_app_mag(a.absolute_magnitude as f64, a.distance);
        let b_mag = abs_to_app_mag(b.absolute_magnitude as f64, b.distance);
        a_mag.total_cmp(&b_mag)
    });
    for hit in visible.iter().take(BRIGHTEST_SHOWN) {
        info!(
            "  #{:<8} {:>12.4e} ly  abs {:>6.2}  app {:>6.2}",
            hit.object.catalog_number,
            hit.distance,
            hit.absolute_magnitude,
            abs_to_app_mag(hit.absolute_magnitude as f64, hit.distance)
        );
    }

    let close = tree.collect_close(observer, args.radius);
    info!("{} objects within {:.3e} ly", close.len(), args.radius);

    let faces = [
        DQuat::IDENTITY,
        DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2),
        DQuat::from_rotation_y(std::f64::consts::PI),
        DQuat::from_rotation_y(-std::f64::consts::FRAC_PI_2),
        DQuat::from_rotation_x(std::f64::consts::FRAC_PI_2),
        DQuat::from_rotation_x(-std::f64::consts::FRAC_PI_2),
    ];
    let queries: Vec<VisibilityQuery> = faces
        .iter()
        .map(|&orientation| {
            VisibilityQuery::from_view(observer, orientation, std::f64::consts::FRAC_PI_2, 1.0, args.limit)
        })
        .collect();

    let per_face = tree.par_collect_visible(&queries);
    let counts: Vec<usize> = per_face.iter().map(Vec::len).collect();
    info!("Cube-face visible counts: {:?}", counts);

    Ok(())
}
