use std::collections::HashMap;

use poisson_scatter::prelude::*;
use poisson_scatter_examples::{init_tracing, write_points_csv};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SampleConfig::new(200.0, 120.0, 6.0)
        .with_attempts(20)
        .with_inset(2.0);
    let sampler = PoissonSampler::try_new(config)?;

    let mut rejections: HashMap<RejectReason, usize> = HashMap::new();
    let mut retired = 0usize;
    let mut sink = FnSink::new(|event| match event {
        SampleEvent::CandidateRejected { reason, .. } => {
            *rejections.entry(reason).or_default() += 1;
        }
        SampleEvent::PointRetired { .. } => retired += 1,
        _ => {}
    });

    let mut rng = StdRng::seed_from_u64(7);
    let result = sampler.run_with_events(&mut rng, &mut sink)?;
    drop(sink);

    info!(
        "{} points after {} iterations, {} retired",
        result.len(),
        result.stats.iterations,
        retired
    );
    let mut reasons: Vec<_> = rejections.into_iter().collect();
    reasons.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
    for (reason, count) in reasons {
        info!("rejected {:?}: {}", reason, count);
    }

    write_points_csv(&result.points, std::io::stdout().lock())?;
    Ok(())
}
