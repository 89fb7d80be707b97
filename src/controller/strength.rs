use std::cmp::Ordering;

use crate::model::{FieldAnalysis, FieldStrength, Player, StrengthLabel};

const ELITE_SG: f64 = 1.5;
const TOP_TIER_SG: f64 = 1.0;
const TOP_GROUP_SIZE: usize = 20;

/// Score the field's competitive strength.
///
/// rating = clamp((mean sg_total + 1.5) * 3, 0, 10). The label checks run
/// Elite, then Strong, then Weak, defaulting to Moderate; keep that order,
/// it decides the boundary cases (a rating of exactly 3 is Weak).
#[must_use]
pub fn analyze(players: &[Player]) -> FieldAnalysis {
    if players.is_empty() {
        return FieldAnalysis {
            strength: FieldStrength {
                rating: 0.0,
                label: StrengthLabel::Weak,
                elite_count: 0,
                top_tier: 0,
            },
            field_avg_sg: 0.0,
            top20_avg_sg: 0.0,
        };
    }

    let field_avg_sg =
        players.iter().map(|p| p.sg_total).sum::<f64>() / players.len() as f64;
    let rating = ((field_avg_sg + 1.5) * 3.0).clamp(0.0, 10.0);

    let label = if rating >= 8.0 {
        StrengthLabel::Elite
    } else if rating >= 6.0 {
        StrengthLabel::Strong
    } else if rating <= 3.0 {
        StrengthLabel::Weak
    } else {
        StrengthLabel::Moderate
    };

    let elite_count = players.iter().filter(|p| p.sg_total >= ELITE_SG).count();
    let top_tier = players.iter().filter(|p| p.sg_total >= TOP_TIER_SG).count();

    let mut totals: Vec<f64> = players.iter().map(|p| p.sg_total).collect();
    totals.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    let top_group = &totals[..totals.len().min(TOP_GROUP_SIZE)];
    let top20_avg_sg = top_group.iter().sum::<f64>() / top_group.len() as f64;

    FieldAnalysis {
        strength: FieldStrength {
            rating,
            label,
            elite_count,
            top_tier,
        },
        field_avg_sg,
        top20_avg_sg,
    }
}
