//! StockSense screener
//!
//! Runs one screening pass over bar files in `DATA_DIR` and prints the
//! ranked table. Ctrl-C stops issuing new tickers and prints what finished.

use dotenvy::dotenv;
use std::env;
use std::sync::Arc;
use stocksense::config::{get_environment, ScreenerConfig};
use stocksense::logging;
use stocksense::models::screen::{ScreenResult, TickerRecord};
use stocksense::screener::{CancelToken, ScanScope, SectorScreener, SectorUniverse};
use stocksense::services::JsonDirectoryMarketData;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();
    logging::init_logging()?;

    info!(environment = %get_environment(), "Starting StockSense screener");

    let config = ScreenerConfig::from_env()?;
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let manual = env::var("SCREEN_TICKERS").unwrap_or_default();
    let sectors: Vec<String> = env::var("SCREEN_SECTORS")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    let scope = ScanScope::from_inputs(&manual, &sectors);
    info!(data_dir = %data_dir, scope = ?scope, "Scan scope");

    let universe = SectorUniverse::idx_default();
    let provider = Arc::new(JsonDirectoryMarketData::new(data_dir));
    let screener = SectorScreener::new(provider, config);

    let cancel = CancelToken::new();
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            warn!("Cancelling scan, waiting for in-flight tickers...");
            ctrl_c_token.cancel();
        }
    });

    let result = screener.screen(&universe, &scope, &cancel).await?;

    if env::var("SCREEN_JSON").map(|v| v == "1").unwrap_or(false) {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    Ok(())
}

fn print_result(result: &ScreenResult) {
    if result.cancelled {
        println!(
            "Scan cancelled: {} scanned, {} skipped",
            result.scanned, result.skipped
        );
    }
    println!("Ranked ({}):", result.ranked.len());
    for (i, record) in result.ranked.iter().enumerate() {
        print_record(i + 1, record);
    }
    println!();
    println!("Rejected ({}):", result.rejected.len());
    for rejection in &result.rejected {
        println!(
            "  {:<10} {:<24} {} {}",
            rejection.symbol,
            rejection.sector,
            rejection.reason,
            rejection.detail.as_deref().unwrap_or("")
        );
    }
}

fn print_record(rank: usize, record: &TickerRecord) {
    let fmt = |v: Option<f64>| v.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string());
    let ind = &record.indicators;
    println!(
        "  {:>3}. {:<10} {:<5} {:<13} RVOL {:>6}  Max RVOL {:>6}  CMF {:>6}  MFI {:>6}  RSI {:>6}  Close {:>10}",
        rank,
        record.symbol,
        "*".repeat(record.score.stars as usize),
        record.score.outlook.label(),
        fmt(ind.rvol),
        fmt(ind.max_rvol),
        fmt(ind.cmf),
        fmt(ind.mfi),
        fmt(ind.rsi),
        fmt(ind.close),
    );
    for hit in &record.score.hits {
        println!("         + {} (+{})", hit.label, hit.awarded);
    }
    for note in &record.score.notes {
        println!("         - {}", note.label);
    }
}
