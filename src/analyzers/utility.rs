/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
///
/// The sum is carried exactly and the division is corrected by its residual,
/// so `mean(&[0.1, 0.2, 0.3])` is `0.2` rather than `0.20000000000000004`.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;

    let sum = partials(values.iter().copied());
    let approx = round_partials(&sum);
    if !approx.is_finite() || values.iter().any(|v| !v.is_finite()) {
        return values.iter().sum::<f64>() / n;
    }

    let q = approx / n;
    // q * n == p + e exactly
    let p = q * n;
    let e = q.mul_add(n, -p);
    let residual = round_partials(&partials(sum.iter().copied().chain([-p, -e])));

    q + residual / n
}

/// Exact sum of `values` as non-overlapping partials, smallest magnitude first.
fn partials(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut partials: Vec<f64> = Vec::new();

    for mut x in values {
        let mut i = 0;
        for j in 0..partials.len() {
            let mut y = partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            let lo = y - (hi - x);
            if lo != 0.0 {
                partials[i] = lo;
                i += 1;
            }
            x = hi;
        }
        partials.truncate(i);
        partials.push(x);
    }

    partials
}

fn round_partials(partials: &[f64]) -> f64 {
    partials.iter().rev().fold(0.0, |acc, p| acc + p)
}

/// Computes the median, averaging the two middle values for even-length input.
/// Returns 0.0 for empty input.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Smallest value, or 0.0 for empty input.
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// Largest value, or 0.0 for empty input.
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}
