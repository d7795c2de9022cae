//! Contact-quota usage math shared by the list view.

#[cfg(test)]
#[path = "usage_test.rs"]
mod usage_test;

/// Highest percentage shown for a quota that is not yet exhausted.
const MAX_PARTIAL_PERCENT: f64 = 99.999;

/// Usage-bar color band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageColor {
    Green,
    Amber,
    Red,
}

impl UsageColor {
    /// Pick the band for a usage percentage: `<70` green, `<90` amber, else red.
    pub fn for_percent(percent: f64) -> Self {
        if percent < 70.0 {
            Self::Green
        } else if percent < 90.0 {
            Self::Amber
        } else {
            Self::Red
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Green => "#4CAF50",
            Self::Amber => "#FFC107",
            Self::Red => "#e74c3c",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
        }
    }
}

/// Percentage of `limit` consumed by `amount`, capped at 100.
///
/// Returns 0 when there is no limit. The result is exactly 100 only once the
/// limit is reached, so a nearly full quota never reads as exhausted.
#[allow(clippy::cast_precision_loss)]
pub fn usage_percent(amount: u64, limit: u64) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    if amount >= limit {
        return 100.0;
    }
    ((amount as f64 / limit as f64) * 100.0).min(MAX_PARTIAL_PERCENT)
}

/// Whether a configured limit has been met or exceeded.
pub fn limit_reached(amount: u64, limit: u64) -> bool {
    limit > 0 && amount >= limit
}
