// File: crates/statchart-core/src/axis.rs
// Summary: Category (X) and value (Y) axis models with labels and ranges.

/// Ordered category labels; duplicates are kept as separate slots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryAxis {
    pub labels: Vec<String>,
}

impl CategoryAxis {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { labels: labels.into_iter().map(Into::into).collect() }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValueAxis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl ValueAxis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Range anchored at zero, padded by 5% on whichever side holds data.
    /// Empty or all-zero data gives `0..1`. The range stays finite for any finite input; the
    /// margin is dropped on a side where it would overflow.
    pub fn autoscale(label: impl Into<String>, values: &[f64]) -> Self {
        let mut lo = 0.0f64;
        let mut hi = 0.0f64;
        for &v in values.iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if (hi - lo).abs() < 1e-12 {
            return Self::new(label, 0.0, 1.0);
        }
        let margin = (hi - lo).min(f64::MAX) * 0.05;
        if hi > 0.0 && (hi + margin).is_finite() {
            hi += margin;
        }
        if lo < 0.0 && (lo - margin).is_finite() {
            lo -= margin;
        }
        Self::new(label, lo, hi)
    }
}
