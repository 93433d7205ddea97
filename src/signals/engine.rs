//! Per-ticker pipeline: indicators → safety gate → score.

use crate::config::ScreenerConfig;
use crate::indicators::IndicatorEngine;
use crate::models::bars::BarSeries;
use crate::models::screen::{Rejection, RejectionReason, TickerRecord};
use crate::signals::safety::SafetyFilter;
use crate::signals::scoring::ScoringEngine;

/// What one ticker produced in a screening pass.
#[derive(Debug, Clone, PartialEq)]
pub enum TickerOutcome {
    Scored(TickerRecord),
    Rejected(Rejection),
}

impl TickerOutcome {
    pub fn symbol(&self) -> &str {
        match self {
            TickerOutcome::Scored(r) => &r.symbol,
            TickerOutcome::Rejected(r) => &r.symbol,
        }
    }

    /// Outcome for a ticker whose bars could not be fetched.
    pub fn unavailable(symbol: &str, sector: &str, detail: impl Into<String>) -> Self {
        TickerOutcome::Rejected(Rejection {
            symbol: symbol.to_string(),
            sector: sector.to_string(),
            reason: RejectionReason::DataUnavailable,
            detail: Some(detail.into()),
            indicators: None,
        })
    }
}

pub struct SignalEngine;

impl SignalEngine {
    /// Run the synchronous part of the pipeline on an already fetched series.
    ///
    /// Rejected tickers are never scored.
    pub fn evaluate(series: &BarSeries, sector: &str, config: &ScreenerConfig) -> TickerOutcome {
        let indicators = IndicatorEngine::compute(series, &config.indicators);
        let verdict = SafetyFilter::evaluate_indicators(&indicators, &config.safety);

        if let Some(reason) = verdict.reason {
            return TickerOutcome::Rejected(Rejection {
                symbol: series.symbol().to_string(),
                sector: sector.to_string(),
                reason,
                detail: verdict.detail,
                indicators: Some(indicators),
            });
        }

        let score = ScoringEngine::score(&indicators, &config.scoring);
        TickerOutcome::Scored(TickerRecord {
            symbol: series.symbol().to_string(),
            sector: sector.to_string(),
            indicators,
            verdict,
            score,
        })
    }
}
