//! Core data structures for tagged series.

mod sample;
mod series;

pub use sample::{PointKind, Polarity, Sample};
pub use series::{build, TaggedSeries, MIN_SERIES_LEN};
