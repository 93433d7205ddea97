use thiserror::Error;

/// A mis-specified screening pass. Raised before any ticker is fetched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("lookback window `{name}` must be at least 1")]
    ZeroWindow { name: &'static str },

    #[error("threshold `{name}` must be a finite, non-negative number (got {value})")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("concurrency must be at least 1")]
    ZeroConcurrency,

    #[error("max_stars must be between 1 and 5 (got {0})")]
    InvalidMaxStars(u8),

    #[error("min_history_bars ({min_history_bars}) is shorter than liquidity_period ({liquidity_period})")]
    HistoryBelowLiquidityWindow {
        min_history_bars: usize,
        liquidity_period: usize,
    },

    #[error("scoring rule table is empty")]
    EmptyRuleTable,

    #[error("scoring rule `{0}` has no conditions")]
    EmptyRule(String),

    #[error("sector universe is empty")]
    EmptyUniverse,

    #[error("unknown sector `{0}`")]
    UnknownSector(String),

    #[error("invalid value `{value}` for {key}")]
    InvalidEnv { key: String, value: String },
}

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("no tickers selected for screening")]
    EmptySelection,
}
