use poisson_scatter::prelude::*;
use poisson_scatter_examples::{init_tracing, write_points_csv, PointSummary};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(42);
    let points = sample(100.0, 100.0, 10.0, 30, &mut rng)?;

    let summary = PointSummary::from_points(&points);
    info!(
        "{} points, closest pair {:?}, bounds {} .. {}",
        summary.count, summary.min_pair_distance, summary.bounds_min, summary.bounds_max
    );

    write_points_csv(&points, std::io::stdout().lock())?;
    Ok(())
}
