use crate::models::indicators::IndicatorKind;
use crate::models::rules::NoteKind;
use serde::{Deserialize, Serialize};

/// An indicator value that took part in a rule decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub indicator: IndicatorKind,
    pub value: f64,
}

/// A satisfied scoring rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleHit {
    pub rule: String,
    pub label: String,
    /// Stars the rule is worth.
    pub stars: u8,
    /// Stars that actually counted once the cap was applied.
    pub awarded: u8,
    pub readings: Vec<Reading>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub kind: NoteKind,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outlook {
    StrongBuy,
    Accumulation,
    NeutralWait,
}

impl Outlook {
    pub fn from_stars(stars: u8) -> Self {
        match stars {
            s if s >= 4 => Outlook::StrongBuy,
            s if s >= 2 => Outlook::Accumulation,
            _ => Outlook::NeutralWait,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outlook::StrongBuy => "STRONG BUY",
            Outlook::Accumulation => "ACCUMULATION",
            Outlook::NeutralWait => "NEUTRAL/WAIT",
        }
    }
}

/// Composite star score for one admitted ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub stars: u8,
    pub raw_stars: u32,
    pub hits: Vec<RuleHit>,
    pub outlook: Outlook,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<Note>,
}

impl ScoreResult {
    pub fn hit(&self, rule: &str) -> Option<&RuleHit> {
        self.hits.iter().find(|h| h.rule == rule)
    }
}
