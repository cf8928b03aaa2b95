use std::io::Write;

use glam::Vec2;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honoring `RUST_LOG`, defaulting to `info` and
/// `debug` for the sampler itself.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,poisson_scatter=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Writes `x,y` lines with a header.
pub fn write_points_csv(points: &[Vec2], mut out: impl Write) -> std::io::Result<()> {
    writeln!(out, "x,y")?;
    for p in points {
        writeln!(out, "{},{}", p.x, p.y)?;
    }
    out.flush()
}

/// Aggregate figures for a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSummary {
    pub count: usize,
    pub min_pair_distance: Option<f32>,
    pub bounds_min: Vec2,
    pub bounds_max: Vec2,
}

impl PointSummary {
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut min_pair_distance: Option<f32> = None;
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                let d = a.distance(*b);
                min_pair_distance = Some(min_pair_distance.map_or(d, |m| m.min(d)));
            }
        }

        let (bounds_min, bounds_max) = if points.is_empty() {
            (Vec2::ZERO, Vec2::ZERO)
        } else {
            points.iter().fold(
                (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
                |(lo, hi), p| (lo.min(*p), hi.max(*p)),
            )
        };

        Self {
            count: points.len(),
            min_pair_distance,
            bounds_min,
            bounds_max,
        }
    }
}
