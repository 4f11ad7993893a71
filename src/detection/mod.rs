//! Detection utilities for series analysis.
//!
//! This module provides local extremum tagging: every interior sample is
//! classified as a strict peak, a strict bottom, or neither.

mod extremum;

pub use extremum::{classify, tag_extrema, ExtremaSummary};
