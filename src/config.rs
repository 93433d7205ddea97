//! Screening configuration loaded from the environment.
//!
//! Every threshold and window the engine uses lives in one of the value
//! objects below and is passed explicitly to the component that needs it.
//! Nothing reads global state, so two passes with different settings can run
//! side by side.

use crate::error::ConfigError;
use crate::indicators::registry::IndicatorRegistry;
use crate::models::rules::{NoteRule, ScoringRule};
use crate::signals::rules::{default_note_rules, default_rules};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

pub const DEFAULT_CONCURRENCY: usize = 8;

/// Upper bound of the star scale.
pub const STAR_CEILING: u8 = 5;

/// Get the current environment (`APP_ENV`, defaults to "sandbox")
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// How far back VWAP accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VwapWindow {
    /// Trailing `n` bars.
    Rolling(usize),
    /// Every bar in the fetched series.
    Session,
}

impl FromStr for VwapWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "session" => Ok(VwapWindow::Session),
            other => other
                .parse::<usize>()
                .map(VwapWindow::Rolling)
                .map_err(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub rvol_period: usize,
    /// Trailing bars scanned for the peak RVOL.
    pub peak_rvol_window: usize,
    pub cmf_period: usize,
    pub mfi_period: usize,
    pub rsi_period: usize,
    pub sma_period: usize,
    pub vwap: VwapWindow,
    /// Window of the average volume the safety filter checks.
    pub liquidity_period: usize,
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,
    /// Bars shown on a chart, on top of the indicator lookback.
    pub chart_window: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rvol_period: 20,
            peak_rvol_window: 14,
            cmf_period: 20,
            mfi_period: 14,
            rsi_period: 14,
            sma_period: 200,
            vwap: VwapWindow::Rolling(20),
            liquidity_period: 20,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            chart_window: 250,
        }
    }
}

impl IndicatorConfig {
    /// Bars needed for every configured indicator to be defined.
    pub fn required_lookback(&self) -> usize {
        IndicatorRegistry::all()
            .into_iter()
            .map(|kind| IndicatorRegistry::lookback(kind, self))
            .chain([self.bollinger_period])
            .max()
            .unwrap_or(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let windows = [
            ("rvol_period", self.rvol_period),
            ("peak_rvol_window", self.peak_rvol_window),
            ("cmf_period", self.cmf_period),
            ("mfi_period", self.mfi_period),
            ("rsi_period", self.rsi_period),
            ("sma_period", self.sma_period),
            ("liquidity_period", self.liquidity_period),
            ("bollinger_period", self.bollinger_period),
            ("chart_window", self.chart_window),
        ];
        for (name, value) in windows {
            if value == 0 {
                return Err(ConfigError::ZeroWindow { name });
            }
        }
        if self.vwap == VwapWindow::Rolling(0) {
            return Err(ConfigError::ZeroWindow { name: "vwap" });
        }
        check_threshold("bollinger_std_dev", self.bollinger_std_dev)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyConfig {
    pub min_price: f64,
    pub min_avg_volume: f64,
    /// Minimum average traded value (`avg_volume * close`), if enforced.
    pub min_avg_turnover: Option<f64>,
    pub min_history_bars: usize,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            min_price: 60.0,
            min_avg_volume: 100_000.0,
            min_avg_turnover: Some(2_000_000_000.0),
            min_history_bars: 21,
        }
    }
}

impl SafetyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("min_price", self.min_price)?;
        check_threshold("min_avg_volume", self.min_avg_volume)?;
        if let Some(turnover) = self.min_avg_turnover {
            check_threshold("min_avg_turnover", turnover)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub rules: Vec<ScoringRule>,
    #[serde(default)]
    pub notes: Vec<NoteRule>,
    pub max_stars: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            notes: default_note_rules(),
            max_stars: 5,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=STAR_CEILING).contains(&self.max_stars) {
            return Err(ConfigError::InvalidMaxStars(self.max_stars));
        }
        if self.rules.is_empty() {
            return Err(ConfigError::EmptyRuleTable);
        }
        if let Some(rule) = self.rules.iter().find(|r| r.conditions.is_empty()) {
            return Err(ConfigError::EmptyRule(rule.name.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenerConfig {
    pub indicators: IndicatorConfig,
    pub safety: SafetyConfig,
    pub scoring: ScoringConfig,
    /// Maximum tickers in flight at once. 1 runs the pass sequentially.
    pub concurrency: usize,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            indicators: IndicatorConfig::default(),
            safety: SafetyConfig::default(),
            scoring: ScoringConfig::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl ScreenerConfig {
    /// Build a config from `SCREENER_*` environment variables layered over
    /// the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let ind = defaults.indicators;
        let safety = defaults.safety;

        let indicators = IndicatorConfig {
            rvol_period: env_or("SCREENER_RVOL_PERIOD", ind.rvol_period)?,
            peak_rvol_window: env_or("SCREENER_PEAK_RVOL_WINDOW", ind.peak_rvol_window)?,
            cmf_period: env_or("SCREENER_CMF_PERIOD", ind.cmf_period)?,
            mfi_period: env_or("SCREENER_MFI_PERIOD", ind.mfi_period)?,
            rsi_period: env_or("SCREENER_RSI_PERIOD", ind.rsi_period)?,
            sma_period: env_or("SCREENER_SMA_PERIOD", ind.sma_period)?,
            vwap: env_or("SCREENER_VWAP_WINDOW", ind.vwap)?,
            liquidity_period: env_or("SCREENER_LIQUIDITY_PERIOD", ind.liquidity_period)?,
            bollinger_period: env_or("SCREENER_BOLLINGER_PERIOD", ind.bollinger_period)?,
            bollinger_std_dev: env_or("SCREENER_BOLLINGER_STD_DEV", ind.bollinger_std_dev)?,
            chart_window: env_or("SCREENER_CHART_WINDOW", ind.chart_window)?,
        };

        let min_avg_turnover = match env::var("SCREENER_MIN_AVG_TURNOVER") {
            Ok(raw) if matches!(raw.trim(), "off" | "none" | "") => None,
            Ok(raw) => Some(parse_env("SCREENER_MIN_AVG_TURNOVER", &raw)?),
            Err(_) => safety.min_avg_turnover,
        };

        let config = Self {
            indicators,
            safety: SafetyConfig {
                min_price: env_or("SCREENER_MIN_PRICE", safety.min_price)?,
                min_avg_volume: env_or("SCREENER_MIN_AVG_VOLUME", safety.min_avg_volume)?,
                min_avg_turnover,
                min_history_bars: env_or("SCREENER_MIN_HISTORY_BARS", safety.min_history_bars)?,
            },
            scoring: defaults.scoring,
            concurrency: env_or("SCREENER_CONCURRENCY", defaults.concurrency)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.indicators.validate()?;
        self.safety.validate()?;
        self.scoring.validate()?;
        // Tickers past the history gate must have a defined liquidity average
        if self.safety.min_history_bars < self.indicators.liquidity_period {
            return Err(ConfigError::HistoryBelowLiquidityWindow {
                min_history_bars: self.safety.min_history_bars,
                liquidity_period: self.indicators.liquidity_period,
            });
        }
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(())
    }

    /// Bars to request from the data provider.
    pub fn required_lookback(&self) -> usize {
        self.indicators
            .required_lookback()
            .max(self.safety.min_history_bars)
    }

    /// Bars to request for a chart: the lookback plus the display window,
    /// so every displayed bar has its indicators defined.
    pub fn chart_lookback(&self) -> usize {
        self.required_lookback() + self.indicators.chart_window
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => parse_env(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_env<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key: key.to_string(),
        value: raw.to_string(),
    })
}
