//! Default smart-money rule table.
//!
//! Rules are evaluated in table order. The two CMF tiers share the
//! `cmf_tier` group, strongest tier first, so at most one of them hits.

use crate::models::indicators::IndicatorKind;
use crate::models::rules::{Comparison, Condition, NoteKind, NoteRule, ScoringRule};

pub const VOLUME_EXPLOSION: &str = "volume_explosion";
pub const STRONG_ACCUMULATION: &str = "strong_accumulation";
pub const MODERATE_INFLOW: &str = "moderate_inflow";
pub const TREND_CONFIRMATION: &str = "trend_confirmation";
pub const STRATEGIC_DIP_BUY: &str = "strategic_dip_buy";

pub const CMF_TIER_GROUP: &str = "cmf_tier";

pub fn default_rules() -> Vec<ScoringRule> {
    use Comparison::{GreaterThan, LessThan};
    use IndicatorKind::{Close, Cmf, Mfi, Rvol, Sma200, Vwap};

    vec![
        ScoringRule::new(VOLUME_EXPLOSION, "Volume Explosion", 2)
            .when(Condition::threshold(Rvol, GreaterThan, 1.5)),
        ScoringRule::new(STRONG_ACCUMULATION, "Strong Accumulation", 2)
            .in_group(CMF_TIER_GROUP)
            .when(Condition::threshold(Cmf, GreaterThan, 0.15)),
        ScoringRule::new(MODERATE_INFLOW, "Moderate Inflow", 1)
            .in_group(CMF_TIER_GROUP)
            .when(Condition::threshold(Cmf, GreaterThan, 0.05)),
        ScoringRule::new(TREND_CONFIRMATION, "Trend Confirmation", 1)
            .when(Condition::against(Close, GreaterThan, Vwap)),
        ScoringRule::new(STRATEGIC_DIP_BUY, "Strategic Dip Buy", 1)
            .when(Condition::threshold(Mfi, LessThan, 30.0))
            .when(Condition::against(Close, GreaterThan, Sma200)),
    ]
}

pub fn default_note_rules() -> Vec<NoteRule> {
    use Comparison::{GreaterThan, LessEqual, LessThan};
    use IndicatorKind::{Close, Cmf, Mfi, Vwap};

    vec![
        NoteRule {
            kind: NoteKind::Distribution,
            label: "Distribution detected (CMF < -0.05)".to_string(),
            condition: Condition::threshold(Cmf, LessThan, -0.05),
        },
        NoteRule {
            kind: NoteKind::BelowVwap,
            label: "Price below VWAP".to_string(),
            condition: Condition::against(Close, LessEqual, Vwap),
        },
        NoteRule {
            kind: NoteKind::Overbought,
            label: "Overbought (MFI > 75)".to_string(),
            condition: Condition::threshold(Mfi, GreaterThan, 75.0),
        },
    ]
}
