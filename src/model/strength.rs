use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
    Elite,
}

impl StrengthLabel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::Elite => "Elite",
        }
    }
}

/// Aggregate strength of a tournament field.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FieldStrength {
    /// 0 to 10 scale, shown to one decimal.
    pub rating: f64,
    pub label: StrengthLabel,
    /// Players with sg_total >= 1.5.
    pub elite_count: usize,
    /// Players with sg_total >= 1.0, so always at least `elite_count`.
    pub top_tier: usize,
}

impl FieldStrength {
    #[must_use]
    pub fn rating_display(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Field strength plus the two auxiliary averages computed in the same pass.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FieldAnalysis {
    pub strength: FieldStrength,
    /// Mean sg_total across the whole field.
    pub field_avg_sg: f64,
    /// Mean sg_total across the 20 highest-rated players (fewer if the
    /// roster is smaller).
    pub top20_avg_sg: f64,
}
