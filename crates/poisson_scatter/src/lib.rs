#![forbid(unsafe_code)]
//! poisson_scatter: bounded-attempt, fixed-radius Poisson disk sampling in 2D.
//!
//! Modules:
//! - config: sampling parameters and validation
//! - poisson: acceleration grid, seed placement, candidate validation, active-set driver
//! - events: observability hooks emitted while a run progresses
//! - cancel: cooperative cancellation token
//! - sampling: strategy trait adapter returning positions for a domain extent
//!
//! For examples, see the `poisson_scatter_examples` crate.
pub mod cancel;
pub mod config;
pub mod error;
pub mod events;
pub mod poisson;
pub mod sampling;

pub use poisson::sample;

/// Convenient re-exports for common types. Import with `use poisson_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::cancel::CancelToken;
    pub use crate::config::SampleConfig;
    pub use crate::error::{Error, Result};
    pub use crate::events::{
        EventSink, FnSink, MultiSink, RejectReason, SampleEvent, SampleEventKind, VecSink,
    };
    pub use crate::poisson::driver::{run_sampling, PoissonSampler, SampleResult, SampleStats};
    pub use crate::poisson::grid::SampleGrid;
    pub use crate::poisson::sample;
    pub use crate::sampling::{PoissonDiskSampling, PositionSampling};
}
