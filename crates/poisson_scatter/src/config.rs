//! Sampling parameters for a single Poisson disk run.
use std::f32::consts::SQRT_2;

use crate::error::{Error, Result};

/// Default number of spawn attempts per active point before it is retired.
pub const DEFAULT_ATTEMPTS: u32 = 30;
/// Default distance kept between samples and the domain border.
pub const DEFAULT_INSET: f32 = 1.0;
/// Default number of draws allowed while placing the seed point.
pub const DEFAULT_SEED_ATTEMPTS: u32 = 64;

/// Configuration for a Poisson disk sampling run over `[0, width] x [0, height]`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SampleConfig {
    /// Domain width in world units.
    pub width: f32,
    /// Domain height in world units.
    pub height: f32,
    /// Minimum distance between any two accepted points.
    pub min_dist: f32,
    /// Spawn attempts per active point before it is retired.
    pub attempts: u32,
    /// Samples stay within `[inset, extent - inset]` on both axes.
    pub inset: f32,
    /// Upper bound on random draws when placing the seed point.
    pub seed_attempts: u32,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            min_dist: 0.0,
            attempts: DEFAULT_ATTEMPTS,
            inset: DEFAULT_INSET,
            seed_attempts: DEFAULT_SEED_ATTEMPTS,
        }
    }
}

impl SampleConfig {
    /// Creates a new [`SampleConfig`] for the given domain size and minimum distance.
    pub fn new(width: f32, height: f32, min_dist: f32) -> Self {
        Self {
            width,
            height,
            min_dist,
            ..Default::default()
        }
    }

    /// Sets the number of spawn attempts per active point.
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Sets the border inset.
    pub fn with_inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    /// Sets the retry bound for seed placement.
    pub fn with_seed_attempts(mut self, seed_attempts: u32) -> Self {
        self.seed_attempts = seed_attempts;
        self
    }

    /// Edge length of one acceleration grid cell.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.min_dist / SQRT_2
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(Error::InvalidConfig("width and height must be finite".into()));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidConfig("width and height must be > 0".into()));
        }
        if !self.min_dist.is_finite() || self.min_dist <= 0.0 {
            return Err(Error::InvalidConfig(
                "min_dist must be finite and > 0".into(),
            ));
        }
        if self.attempts == 0 {
            return Err(Error::InvalidConfig("attempts must be > 0".into()));
        }
        if self.seed_attempts == 0 {
            return Err(Error::InvalidConfig("seed_attempts must be > 0".into()));
        }
        if !self.inset.is_finite() || self.inset < 0.0 {
            return Err(Error::InvalidConfig(
                "inset must be finite and >= 0".into(),
            ));
        }
        if 2.0 * self.inset >= self.width || 2.0 * self.inset >= self.height {
            return Err(Error::InvalidConfig(format!(
                "inset {} leaves no room in a {}x{} domain",
                self.inset, self.width, self.height
            )));
        }

        Ok(())
    }
}
