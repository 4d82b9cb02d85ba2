//! Descriptive statistics over in-memory samples.
//!
//! Quantiles use R-7 linear interpolation (the default in R, NumPy and
//! pandas), so summary tables here line up with a pandas `describe()` of the
//! same data. Sums are compensated (Neumaier variant of Kahan summation) to
//! keep accumulation error independent of sample size.

/// Compensated (Neumaier) summation.
///
/// Carries a correction term so the low-order bits lost by each addition are
/// recovered at the end. Handles addends larger than the running sum.
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut comp = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            comp += (sum - t) + x;
        } else {
            comp += (x - t) + sum;
        }
        sum = t;
    }
    sum + comp
}

/// Arithmetic mean, or `None` for empty input.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Sample variance (n − 1 denominator), or `None` if fewer than 2 samples.
///
/// Two-pass: mean first, then squared deviations. At the sample sizes this
/// crate handles (a year of readings) the two-pass form is exact enough and
/// avoids the cancellation of the naive E[X²] − E[X]² formula.
pub fn sample_variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let m = mean(data)?;
    let sq_dev: Vec<f64> = data.iter().map(|&x| (x - m) * (x - m)).collect();
    Some(kahan_sum(&sq_dev) / (data.len() - 1) as f64)
}

/// Sample standard deviation, or `None` if fewer than 2 samples.
pub fn sample_std(data: &[f64]) -> Option<f64> {
    sample_variance(data).map(f64::sqrt)
}

/// Minimum value, or `None` for empty input.
pub fn min(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::min)
}

/// Maximum value, or `None` for empty input.
pub fn max(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::max)
}

/// The `p`-th quantile (R-7 linear interpolation), or `None` for empty input
/// or `p` outside [0, 1].
///
/// Sorts a copy of the input; use [`quantile_sorted`] when several quantiles
/// are taken from the same data.
pub fn quantile(data: &[f64], p: f64) -> Option<f64> {
    if data.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    quantile_sorted(&sorted, p)
}

/// The `p`-th quantile (R-7) over data already sorted ascending.
///
/// For sorted values x[0..n]: h = (n − 1)·p, then interpolate linearly
/// between x[⌊h⌋] and x[⌊h⌋ + 1].
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || !(0.0..=1.0).contains(&p) {
        return None;
    }
    if n == 1 {
        return Some(sorted[0]);
    }
    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - h.floor();
    if j + 1 >= n {
        Some(sorted[n - 1])
    } else {
        Some((1.0 - g) * sorted[j] + g * sorted[j + 1])
    }
}

/// Mean and the biased central moments (m₂, m₃, m₄) in one sweep.
///
/// Returns `(mean, m2, m3, m4)` with mᵣ = Σ(xᵢ − x̄)ʳ / n, or `None` for
/// empty input. These are the moments the skewness/kurtosis transforms of
/// the normality test are defined on.
pub fn central_moments(data: &[f64]) -> Option<(f64, f64, f64, f64)> {
    let n = data.len();
    if n == 0 {
        return None;
    }
    let m = mean(data)?;
    let mut sum2 = 0.0;
    let mut sum3 = 0.0;
    let mut sum4 = 0.0;
    for &x in data {
        let d = x - m;
        let d2 = d * d;
        sum2 += d2;
        sum3 += d2 * d;
        sum4 += d2 * d2;
    }
    let nf = n as f64;
    Some((m, sum2 / nf, sum3 / nf, sum4 / nf))
}
