//! Hausdorff distance demo.
//!
//! Usage:
//! ```text
//! cargo run --example hausdorff              # 2000 points per cloud
//! cargo run --example hausdorff -- 500       # custom cloud size
//! RUST_LOG=pointdist=debug cargo run --example hausdorff
//! ```

use std::time::Instant;

use pointdist::error::OperationError;
use pointdist::math::Point3;
use pointdist::operations::query::HausdorffDistance;
use pointdist::operations::Execution;
use pointdist::{hausdorff_distance, PointDistError, PointSet};

const DEFAULT_POINTS: usize = 2000;

fn main() -> Result<(), PointDistError> {
    // Default: WARN for everything, INFO for pointdist and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=pointdist=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hausdorff=info".parse().unwrap_or_default())
        .add_directive("pointdist=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let count = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<usize>().map_err(|e| {
            OperationError::InvalidInput(format!("point count {arg:?}: {e}"))
        })?,
        None => DEFAULT_POINTS,
    };

    small_scenarios()?;
    clouds(count)?;
    Ok(())
}

fn small_scenarios() -> Result<(), PointDistError> {
    let origin = [[0.0, 0.0, 0.0]];

    let d = hausdorff_distance(&origin, &origin)?;
    tracing::info!(d, "origin vs origin");

    let d = hausdorff_distance(&origin, &[[1.0, 0.0, 0.0]])?;
    tracing::info!(d, "origin vs unit x");

    let d = hausdorff_distance(&[[0.0, 0.0, 0.0], [10.0, 10.0, 10.0]], &origin)?;
    tracing::info!(d, "two points vs origin");

    let empty: [[f64; 3]; 0] = [];
    if let Err(e) = hausdorff_distance(&empty, &origin) {
        tracing::info!(%e, "empty set rejected");
    }
    if let Err(e) = hausdorff_distance(&[[0.0, 0.0]], &origin) {
        tracing::info!(%e, "dimension mismatch rejected");
    }
    Ok(())
}

/// Compares both execution strategies on two spiral point clouds.
fn clouds(count: usize) -> Result<(), PointDistError> {
    let x = PointSet::try_from(spiral(count, 0.0).as_slice())?;
    let y = PointSet::try_from(spiral(count, 0.25).as_slice())?;

    for execution in [Execution::Sequential, Execution::Parallel] {
        let start = Instant::now();
        let result = HausdorffDistance::new(&x, &y)
            .with_execution(execution)
            .execute()?;
        tracing::info!(
            ?execution,
            points = count,
            distance = result.distance,
            forward = result.forward,
            backward = result.backward,
            elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
            "spiral clouds"
        );
    }
    Ok(())
}

/// Points along a helix wrapped around the unit sphere, rotated by `phase`.
fn spiral(count: usize, phase: f64) -> Vec<Point3> {
    #[allow(clippy::cast_precision_loss)]
    let n = count.max(1) as f64;
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let fi = i as f64;
            let t = (fi + 0.5) / n;
            let z = 1.0 - 2.0 * t;
            let r = (1.0 - z * z).sqrt();
            let angle = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt()) * fi + phase;
            Point3::new(r * angle.cos(), r * angle.sin(), z)
        })
        .collect()
}
