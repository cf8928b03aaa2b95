//! Active-set driver that grows a sample set from the seed point.
use std::f32::consts::TAU;

use glam::Vec2;
use rand::RngCore;
use tracing::debug;

use crate::cancel::CancelToken;
use crate::config::SampleConfig;
use crate::error::{Error, Result};
use crate::events::{EventSink, RejectReason, SampleEvent, SampleEventKind};
use crate::poisson::grid::SampleGrid;
use crate::poisson::seed::place_seed;
use crate::sampling::{rand01, rand_index};

/// Counters collected during a run.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleStats {
    /// Draws used to place the seed.
    pub seed_attempts: u32,
    /// Active-set iterations, one per picked active point.
    pub iterations: usize,
    /// Candidates spawned around active points.
    pub candidates_generated: usize,
    /// Candidates discarded for any reason.
    pub candidates_rejected: usize,
    /// Active points retired after exhausting their attempts.
    pub points_retired: usize,
}

/// Result of a completed sampling run.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct SampleResult {
    /// Accepted points in grid order.
    pub points: Vec<Vec2>,
    /// Counters for the run.
    pub stats: SampleStats,
}

impl SampleResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Validated sampling configuration that can be run repeatedly.
pub struct PoissonSampler {
    /// Configuration applied to every run.
    pub config: SampleConfig,
}

impl PoissonSampler {
    pub fn try_new(config: SampleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: SampleConfig) -> Self {
        debug_assert!(
            config.width > 0.0 && config.height > 0.0,
            "width and height must be > 0"
        );
        debug_assert!(config.min_dist > 0.0, "min_dist must be > 0");
        debug_assert!(config.attempts > 0, "attempts must be > 0");

        Self { config }
    }

    /// Runs the sampler, returning the result.
    pub fn run(&self, rng: &mut impl RngCore) -> Result<SampleResult> {
        run_sampling(&self.config, rng, None, None)
    }

    pub fn run_with_events(
        &self,
        rng: &mut impl RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<SampleResult> {
        run_sampling(&self.config, rng, Some(sink), None)
    }

    pub fn run_with_cancel(
        &self,
        rng: &mut impl RngCore,
        cancel: &CancelToken,
    ) -> Result<SampleResult> {
        run_sampling(&self.config, rng, None, Some(cancel))
    }
}

/// Runs one sampling pass for `config`.
///
/// `cancel` is checked before every active-set iteration; a cancelled run returns
/// [`Error::Cancelled`] and no points.
pub fn run_sampling(
    config: &SampleConfig,
    rng: &mut dyn RngCore,
    sink: Option<&mut dyn EventSink>,
    cancel: Option<&CancelToken>,
) -> Result<SampleResult> {
    if let Some(s) = sink {
        run_sampling_internal(config, rng, s, cancel)
    } else {
        run_sampling_internal(config, rng, &mut (), cancel)
    }
}

fn run_sampling_internal(
    config: &SampleConfig,
    rng: &mut dyn RngCore,
    sink: &mut dyn EventSink,
    cancel: Option<&CancelToken>,
) -> Result<SampleResult> {
    config.validate()?;
    let mut grid = SampleGrid::new(config.width, config.height, config.min_dist)?;

    debug!(
        "Sampling {}x{} domain, min_dist {}, grid {}x{}.",
        config.width,
        config.height,
        config.min_dist,
        grid.cols(),
        grid.rows()
    );
    if sink.wants(SampleEventKind::RunStarted) {
        sink.send(SampleEvent::RunStarted {
            config: config.clone(),
            cols: grid.cols(),
            rows: grid.rows(),
        });
    }

    let mut stats = SampleStats::default();
    let (seed, seed_attempts) = place_seed(&mut grid, config, rng)?;
    stats.seed_attempts = seed_attempts;
    if sink.wants(SampleEventKind::SeedPlaced) {
        sink.send(SampleEvent::SeedPlaced {
            position: seed,
            attempts: seed_attempts,
        });
    }

    let mut active = vec![seed];
    while !active.is_empty() {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            debug!("Sampling cancelled with {} points placed.", grid.len());
            return Err(Error::Cancelled);
        }
        stats.iterations += 1;

        let index = rand_index(rng, active.len());
        let parent = active[index];

        if let Some(child) = spawn_around(&mut grid, config, parent, rng, sink, &mut stats) {
            active.push(child);
        } else {
            active.swap_remove(index);
            stats.points_retired += 1;
            if sink.wants(SampleEventKind::PointRetired) {
                sink.send(SampleEvent::PointRetired { position: parent });
            }
        }
    }

    let points = grid.into_points();
    debug!(
        "Sampling finished: {} points, {} candidates ({} rejected).",
        points.len(),
        stats.candidates_generated,
        stats.candidates_rejected
    );
    if sink.wants(SampleEventKind::RunFinished) {
        sink.send(SampleEvent::RunFinished {
            point_count: points.len(),
            stats,
        });
    }

    Ok(SampleResult { points, stats })
}

/// Tries up to `config.attempts` candidates exactly `min_dist` from `parent`.
///
/// Returns the first candidate that was stored in the grid.
fn spawn_around(
    grid: &mut SampleGrid,
    config: &SampleConfig,
    parent: Vec2,
    rng: &mut dyn RngCore,
    sink: &mut dyn EventSink,
    stats: &mut SampleStats,
) -> Option<Vec2> {
    let max_x = config.width - config.inset;
    let max_y = config.height - config.inset;

    for _ in 0..config.attempts {
        stats.candidates_generated += 1;

        let (sin, cos) = (rand01(rng) * TAU).sin_cos();
        let candidate = parent + Vec2::new(sin, cos) * config.min_dist;

        let outcome = if candidate.x < config.inset
            || candidate.y < config.inset
            || candidate.x > max_x
            || candidate.y > max_y
        {
            Err(RejectReason::OutOfDomain)
        } else if !grid.is_valid(candidate) {
            Err(RejectReason::TooClose)
        } else {
            grid.insert(candidate)
        };

        match outcome {
            Ok(_) => {
                if sink.wants(SampleEventKind::CandidateAccepted) {
                    sink.send(SampleEvent::CandidateAccepted {
                        parent,
                        position: candidate,
                    });
                }
                return Some(candidate);
            }
            Err(reason) => {
                stats.candidates_rejected += 1;
                if sink.wants(SampleEventKind::CandidateRejected) {
                    sink.send(SampleEvent::CandidateRejected {
                        parent,
                        candidate,
                        reason,
                    });
                }
            }
        }
    }

    None
}
