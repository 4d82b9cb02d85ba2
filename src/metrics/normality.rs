//! NORMALITY TEST (D'AGOSTINO'S K²)
//!
//! Omnibus moment test: sample skewness and kurtosis are each transformed
//! into an approximately standard-normal Z score, and K² = Z₁² + Z₂² is
//! referred to a chi-squared distribution with 2 degrees of freedom.
//!
//! Transforms follow D'Agostino, Belanger & D'Agostino Jr. (1990),
//! "A suggestion for using powerful and informative tests of normality",
//! *The American Statistician* 44(4), the same formulation SciPy's
//! `normaltest` implements, so p-values are comparable across toolchains.

use crate::stats;
use serde::Serialize;

/// Significance level for the rejection decision.
pub const ALPHA: f64 = 0.05;

/// Minimum sample size for the kurtosis Z transform to be usable.
pub const MIN_SAMPLES: usize = 8;

/// Result of the normality test. `test` is `None` when the sample is too
/// small (n < 8) or degenerate (zero variance); reported, never a crash.
#[derive(Debug, Clone, Serialize)]
pub struct NormalityResult {
    pub n: usize,
    pub test: Option<NormalityTest>,
}

/// The computed test values
#[derive(Debug, Clone, Serialize)]
pub struct NormalityTest {
    /// K² = Z₁² + Z₂²
    pub statistic: f64,
    /// P(χ²₂ > K²)
    pub p_value: f64,
    /// Z score of the skewness transform
    pub skew_z: f64,
    /// Z score of the kurtosis transform
    pub kurt_z: f64,
    /// Sample skewness g₁ = m₃ / m₂^{3/2}
    pub skewness: f64,
    /// Sample kurtosis b₂ = m₄ / m₂² (Pearson, normal = 3)
    pub kurtosis: f64,
    /// True when p < 0.05
    pub rejects_normality: bool,
}

/// Run D'Agostino's K² test over the daily word counts.
pub fn calculate_normality(counts: &[f64]) -> NormalityResult {
    let n = counts.len();
    let insufficient = NormalityResult { n, test: None };
    if n < MIN_SAMPLES {
        tracing::warn!("normality test needs n >= {}, got {}", MIN_SAMPLES, n);
        return insufficient;
    }

    let Some((_, m2, m3, m4)) = stats::central_moments(counts) else {
        return insufficient;
    };
    if m2 <= 0.0 {
        // Constant sequence: skewness/kurtosis undefined
        return insufficient;
    }

    let g1 = m3 / m2.powf(1.5);
    let b2 = m4 / (m2 * m2);

    let skew_z = skewness_z(g1, n as f64);
    let Some(kurt_z) = kurtosis_z(b2, n as f64) else {
        return insufficient;
    };

    let statistic = skew_z * skew_z + kurt_z * kurt_z;
    let p_value = stats::chi_squared_sf(statistic, 2.0);

    NormalityResult {
        n,
        test: Some(NormalityTest {
            statistic,
            p_value,
            skew_z,
            kurt_z,
            skewness: g1,
            kurtosis: b2,
            rejects_normality: p_value < ALPHA,
        }),
    }
}

/// Transform sample skewness g₁ into an approximately normal Z score
/// (D'Agostino 1970).
fn skewness_z(g1: f64, n: f64) -> f64 {
    let y = g1 * (((n + 1.0) * (n + 3.0)) / (6.0 * (n - 2.0))).sqrt();
    let beta2 = 3.0 * (n * n + 27.0 * n - 70.0) * (n + 1.0) * (n + 3.0)
        / ((n - 2.0) * (n + 5.0) * (n + 7.0) * (n + 9.0));
    let w2 = -1.0 + (2.0 * (beta2 - 1.0)).sqrt();
    let delta = 1.0 / (0.5 * w2.ln()).sqrt();
    let alpha = (2.0 / (w2 - 1.0)).sqrt();
    let y = if y == 0.0 { 1.0 } else { y };
    delta * (y / alpha + ((y / alpha) * (y / alpha) + 1.0).sqrt()).ln()
}

/// Transform sample kurtosis b₂ into an approximately normal Z score
/// (Anscombe & Glynn 1983). Returns `None` when the transform degenerates.
fn kurtosis_z(b2: f64, n: f64) -> Option<f64> {
    let e_b2 = 3.0 * (n - 1.0) / (n + 1.0);
    let var_b2 =
        24.0 * n * (n - 2.0) * (n - 3.0) / ((n + 1.0) * (n + 1.0) * (n + 3.0) * (n + 5.0));
    let x = (b2 - e_b2) / var_b2.sqrt();

    let sqrt_beta1 = 6.0 * (n * n - 5.0 * n + 2.0) / ((n + 7.0) * (n + 9.0))
        * ((6.0 * (n + 3.0) * (n + 5.0)) / (n * (n - 2.0) * (n - 3.0))).sqrt();
    let a = 6.0 + 8.0 / sqrt_beta1
        * (2.0 / sqrt_beta1 + (1.0 + 4.0 / (sqrt_beta1 * sqrt_beta1)).sqrt());

    let term1 = 1.0 - 2.0 / (9.0 * a);
    let denom = 1.0 + x * (2.0 / (a - 4.0)).sqrt();
    if denom == 0.0 {
        return None;
    }
    let term2 = denom.signum() * ((1.0 - 2.0 / a) / denom.abs()).cbrt();
    Some((term1 - term2) / (2.0 / (9.0 * a)).sqrt())
}
