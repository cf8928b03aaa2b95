#![forbid(unsafe_code)]

mod output;

pub use output::{init_tracing, write_points_csv, PointSummary};
