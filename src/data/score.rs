/// Three-tier score bucket for a doctor's match percentage.
///
/// Tiers are ordered `Low < Medium < High`. Boundary values belong to
/// the lower tier: exactly 70% is `Medium`, exactly 40% is `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreTier {
    Low,
    Medium,
    High,
}

impl ScoreTier {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 70.0 {
            ScoreTier::High
        } else if percent > 40.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScoreTier::Low => "low",
            ScoreTier::Medium => "medium",
            ScoreTier::High => "high",
        }
    }
}

/// Match probability as a percentage, rounded to one decimal place.
/// An absent probability renders as 0.
pub fn match_percent(probability: Option<f64>) -> f64 {
    probability.map_or(0.0, |p| (p * 1000.0).round() / 10.0)
}
