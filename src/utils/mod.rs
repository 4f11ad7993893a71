//! Numeric primitives used by selection and segment building.

pub mod piecewise;
pub mod regression;

pub use piecewise::{pwfit, LineParams, PiecewiseFit};
pub use regression::{linreg, LinearFit};
