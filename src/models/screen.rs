//! Per-ticker outcomes and the ranked result of a screening pass.

use crate::models::indicators::IndicatorVector;
use crate::models::score::ScoreResult;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionReason {
    InsufficientHistory,
    PennyPrice,
    IlliquidVolume,
    DataUnavailable,
}

impl RejectionReason {
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::InsufficientHistory => "INSUFFICIENT_HISTORY",
            RejectionReason::PennyPrice => "PENNY_PRICE",
            RejectionReason::IlliquidVolume => "ILLIQUID_VOLUME",
            RejectionReason::DataUnavailable => "DATA_UNAVAILABLE",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyVerdict {
    pub admitted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl SafetyVerdict {
    pub fn admit() -> Self {
        Self {
            admitted: true,
            reason: None,
            detail: None,
        }
    }

    pub fn reject(reason: RejectionReason, detail: impl Into<String>) -> Self {
        Self {
            admitted: false,
            reason: Some(reason),
            detail: Some(detail.into()),
        }
    }
}

/// An admitted and scored ticker.
///
/// The bar series itself is not retained; `symbol` is the key to look it up
/// again through the data provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerRecord {
    pub symbol: String,
    pub sector: String,
    pub indicators: IndicatorVector,
    pub verdict: SafetyVerdict,
    pub score: ScoreResult,
}

impl TickerRecord {
    pub fn stars(&self) -> u8 {
        self.score.stars
    }

    /// Ranking order: stars desc, RVOL desc (undefined last), symbol asc.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .stars
            .cmp(&self.score.stars)
            .then_with(|| match (self.indicators.rvol, other.indicators.rvol) {
                (Some(a), Some(b)) => b.total_cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| self.symbol.cmp(&other.symbol))
    }
}

/// A ticker excluded from scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    pub symbol: String,
    pub sector: String,
    pub reason: RejectionReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Absent when the data could not be fetched at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicators: Option<IndicatorVector>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenResult {
    pub ranked: Vec<TickerRecord>,
    pub rejected: Vec<Rejection>,
    pub cancelled: bool,
    pub scanned: usize,
    pub skipped: usize,
}

impl ScreenResult {
    pub fn symbols(&self) -> Vec<&str> {
        self.ranked.iter().map(|r| r.symbol.as_str()).collect()
    }

    pub fn rejected_with(&self, reason: RejectionReason) -> Vec<&Rejection> {
        self.rejected.iter().filter(|r| r.reason == reason).collect()
    }
}
