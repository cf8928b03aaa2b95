use std::thread;
use std::time::Duration;

use poisson_scatter::prelude::*;
use poisson_scatter_examples::{init_tracing, write_points_csv};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let budget = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>())
        .transpose()?
        .unwrap_or(50);

    let sampler = PoissonSampler::try_new(SampleConfig::new(4096.0, 4096.0, 2.0))?;
    let token = CancelToken::new();

    let watchdog = {
        let token = token.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(budget));
            token.cancel();
        })
    };

    let mut rng = StdRng::seed_from_u64(99);
    match sampler.run_with_cancel(&mut rng, &token) {
        Ok(result) => {
            info!("finished within {budget} ms with {} points", result.len());
            write_points_csv(&result.points, std::io::stdout().lock())?;
        }
        Err(Error::Cancelled) => warn!("sampling exceeded {budget} ms and was cancelled"),
        Err(err) => return Err(err.into()),
    }

    // The watchdog may still be sleeping when the run finishes first.
    let _ = watchdog.join();
    Ok(())
}
