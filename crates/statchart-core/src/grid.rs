// File: crates/statchart-core/src/grid.rs
// Summary: Value-axis tick layout ("nice" steps) and tick label formatting.

/// Upper bound on ticks per axis; anything denser falls back to the range ends.
const MAX_TICKS: i64 = 1_000;

/// Magnitude from which tick labels switch to scientific notation.
const SCI_THRESHOLD: f64 = 1e9;

/// Step size of 1, 2, 2.5 or 5 times a power of ten giving roughly `target` intervals over
/// `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !(span > 0.0) || !span.is_finite() {
        return 1.0;
    }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&m| norm <= m + 1e-9)
        .unwrap_or(10.0);
    mult * mag
}

/// `max - min`, saturated at `f64::MAX` for ranges wider than an `f64` can hold.
pub fn span(min: f64, max: f64) -> f64 {
    (max - min).min(f64::MAX)
}

/// Ticks at multiples of `nice_step` that fall inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return vec![min, max];
    }
    if !(max > min) {
        return vec![min];
    }
    let step = nice_step(span(min, max), target);
    let eps = step * 1e-9;
    let first = ((min - eps) / step).ceil() as i64;
    let last = ((max + eps) / step).floor() as i64;
    if last < first || last.saturating_sub(first) > MAX_TICKS {
        return vec![min, max];
    }
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            if v.abs() < eps {
                0.0
            } else {
                v
            }
        })
        .collect()
}

/// Fewest decimals that represent every multiple of `step` exactly.
pub fn tick_decimals(step: f64) -> usize {
    for d in 0..=6 {
        let scaled = step * 10f64.powi(d as i32);
        if (scaled - scaled.round()).abs() < 1e-6 {
            return d;
        }
    }
    6
}

pub fn format_tick(v: f64, decimals: usize) -> String {
    if v.abs() >= SCI_THRESHOLD {
        format!("{:e}", v)
    } else {
        format!("{:.*}", decimals, v)
    }
}
