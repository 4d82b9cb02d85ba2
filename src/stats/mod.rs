//! Statistical primitives shared across the analyses.
//!
//! - Descriptive: Compensated summation, mean, sample variance, R-7
//!   quantiles, central moments
//! - Special: Chi-squared tail probability for the normality test

pub mod descriptive;
pub mod special;

// Re-export commonly used functions
pub use descriptive::{
    central_moments, kahan_sum, max, mean, min, quantile, quantile_sorted, sample_std,
    sample_variance,
};
pub use special::{chi_squared_sf, regularized_lower_gamma};
