//! Poisson disk position sampling strategy.
use glam::Vec2;
use mint::Vector2;
use rand::RngCore;
use tracing::warn;

use crate::config::{SampleConfig, DEFAULT_ATTEMPTS, DEFAULT_INSET};
use crate::poisson::driver::run_sampling;
use crate::sampling::PositionSampling;

/// Poisson disk sampling strategy.
#[derive(Debug, Clone)]
pub struct PoissonDiskSampling {
    /// Minimum distance between samples in world units.
    pub min_dist: f32,
    /// Spawn attempts per active point.
    pub attempts: u32,
    /// Distance kept from the domain border.
    pub inset: f32,
}

impl PoissonDiskSampling {
    /// Create a new PoissonDiskSampling with specified minimum distance.
    pub fn new(min_dist: f32) -> Self {
        Self {
            min_dist,
            attempts: DEFAULT_ATTEMPTS,
            inset: DEFAULT_INSET,
        }
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn with_inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    fn config_for(&self, extent: Vec2) -> SampleConfig {
        SampleConfig::new(extent.x, extent.y, self.min_dist)
            .with_attempts(self.attempts)
            .with_inset(self.inset)
    }
}

impl PositionSampling for PoissonDiskSampling {
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn RngCore) -> Vec<Vector2<f32>> {
        let extent = Vec2::from(domain_extent);
        let config = self.config_for(extent);

        match run_sampling(&config, rng, None, None) {
            Ok(result) => {
                let half = extent * 0.5;
                result
                    .points
                    .into_iter()
                    .map(|p| (p - half).into())
                    .collect()
            }
            Err(err) => {
                warn!("Poisson disk sampling produced no points: {}.", err);
                Vec::new()
            }
        }
    }
}
