//! Numerical routines shared across the workspace.

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
