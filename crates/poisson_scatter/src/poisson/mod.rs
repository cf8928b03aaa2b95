//! Fixed-radius Poisson disk sampling over an axis-aligned rectangle.
//!
//! A run builds a [`grid::SampleGrid`], places a seed with [`seed::place_seed`], then
//! [`driver::run_sampling`] grows the sample set from randomly picked active points until
//! every point has exhausted its attempts. All state lives for one call only.
use glam::Vec2;
use rand::RngCore;

use crate::config::SampleConfig;
use crate::error::Result;

pub mod driver;
pub mod grid;
pub mod seed;

/// Samples `[0, width] x [0, height]` with at least `min_dist` between points, less the
/// relative [`grid::DISTANCE_TOLERANCE`].
///
/// `attempts` is the number of spawn tries per active point before it is retired.
/// Points stay at least one unit away from the border and come back in grid order.
pub fn sample(
    width: f32,
    height: f32,
    min_dist: f32,
    attempts: u32,
    rng: &mut dyn RngCore,
) -> Result<Vec<Vec2>> {
    let config = SampleConfig::new(width, height, min_dist).with_attempts(attempts);
    driver::run_sampling(&config, rng, None, None).map(|result| result.points)
}
