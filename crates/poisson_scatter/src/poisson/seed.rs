//! Seed point placement.
use glam::Vec2;
use rand::RngCore;

use crate::config::SampleConfig;
use crate::error::{Error, Result};
use crate::poisson::grid::SampleGrid;
use crate::sampling::rand01;

/// Draws a seed in the closed range `[inset, extent - inset]` on both axes and stores it
/// in `grid`.
///
/// Draws landing past the last grid row or column are retried, at most
/// `config.seed_attempts` times. Returns the seed and the number of draws used.
pub fn place_seed(
    grid: &mut SampleGrid,
    config: &SampleConfig,
    rng: &mut dyn RngCore,
) -> Result<(Vec2, u32)> {
    let span_x = config.width - 2.0 * config.inset;
    let span_y = config.height - 2.0 * config.inset;

    for attempt in 1..=config.seed_attempts {
        let seed = Vec2::new(
            config.inset + rand01(rng) * span_x,
            config.inset + rand01(rng) * span_y,
        );
        if grid.insert(seed).is_ok() {
            return Ok((seed, attempt));
        }
    }

    Err(Error::Convergence {
        attempts: config.seed_attempts,
    })
}
