//! Pre-screening safety gate.
//!
//! Conditions are checked in a fixed order and the first failure decides the
//! rejection reason:
//! 1. history shorter than `min_history_bars` → `INSUFFICIENT_HISTORY`
//! 2. latest close below `min_price` → `PENNY_PRICE`
//! 3. average volume below `min_avg_volume`, or average turnover below
//!    `min_avg_turnover` → `ILLIQUID_VOLUME`

use crate::config::SafetyConfig;
use crate::models::indicators::IndicatorVector;
use crate::models::screen::{RejectionReason, SafetyVerdict};

/// The values the gate looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyInput {
    pub close: Option<f64>,
    pub avg_volume: Option<f64>,
    pub bar_count: usize,
}

impl From<&IndicatorVector> for SafetyInput {
    fn from(values: &IndicatorVector) -> Self {
        Self {
            close: values.close,
            avg_volume: values.avg_volume,
            bar_count: values.bar_count,
        }
    }
}

pub struct SafetyFilter;

impl SafetyFilter {
    pub fn evaluate(input: SafetyInput, config: &SafetyConfig) -> SafetyVerdict {
        if input.bar_count < config.min_history_bars {
            return SafetyVerdict::reject(
                RejectionReason::InsufficientHistory,
                format!("{} bars < {}", input.bar_count, config.min_history_bars),
            );
        }

        let close = match input.close {
            Some(close) if close >= config.min_price => close,
            Some(close) => {
                return SafetyVerdict::reject(
                    RejectionReason::PennyPrice,
                    format!("price {close} < {}", config.min_price),
                )
            }
            None => {
                return SafetyVerdict::reject(RejectionReason::PennyPrice, "price undefined")
            }
        };

        let avg_volume = match input.avg_volume {
            Some(v) if v >= config.min_avg_volume => v,
            Some(v) => {
                return SafetyVerdict::reject(
                    RejectionReason::IlliquidVolume,
                    format!("avg volume {v:.0} < {}", config.min_avg_volume),
                )
            }
            None => {
                return SafetyVerdict::reject(
                    RejectionReason::IlliquidVolume,
                    "avg volume undefined",
                )
            }
        };

        if let Some(min_turnover) = config.min_avg_turnover {
            let turnover = avg_volume * close;
            if turnover < min_turnover {
                return SafetyVerdict::reject(
                    RejectionReason::IlliquidVolume,
                    format!("avg turnover {turnover:.0} < {min_turnover}"),
                );
            }
        }

        SafetyVerdict::admit()
    }

    pub fn evaluate_indicators(values: &IndicatorVector, config: &SafetyConfig) -> SafetyVerdict {
        Self::evaluate(SafetyInput::from(values), config)
    }
}
