//! Unit tests for the per-ticker pipeline

use crate::support::{
    accumulation_series, flat_bars, quiet_series, series, test_config, volume_spike_series,
};
use stocksense::models::rules::NoteKind;
use stocksense::models::score::Outlook;
use stocksense::models::screen::RejectionReason;
use stocksense::signals::engine::{SignalEngine, TickerOutcome};
use stocksense::signals::rules::{STRATEGIC_DIP_BUY, VOLUME_EXPLOSION};

#[test]
fn test_accumulation_scores_five_stars() {
    let outcome = SignalEngine::evaluate(&accumulation_series("ACC"), "Energy", &test_config(1));
    let TickerOutcome::Scored(record) = outcome else {
        panic!("expected a scored ticker");
    };
    assert_eq!(record.symbol, "ACC");
    assert_eq!(record.sector, "Energy");
    assert!(record.verdict.admitted);
    assert_eq!(record.score.raw_stars, 6);
    assert_eq!(record.stars(), 5);
    assert_eq!(record.score.hits.len(), 4);
    assert_eq!(record.score.hit(STRATEGIC_DIP_BUY).map(|h| h.awarded), Some(0));
    assert_eq!(record.score.outlook, Outlook::StrongBuy);
    assert!(record.score.notes.is_empty());
}

#[test]
fn test_volume_spike_scores_two_stars() {
    let outcome = SignalEngine::evaluate(
        &volume_spike_series("SPK", 100.0, 200_000.0, 3.0),
        "Energy",
        &test_config(1),
    );
    let TickerOutcome::Scored(record) = outcome else {
        panic!("expected a scored ticker");
    };
    assert_eq!(record.stars(), 2);
    assert!(record.score.hit(VOLUME_EXPLOSION).is_some());
    assert_eq!(record.score.outlook, Outlook::Accumulation);
    let notes: Vec<NoteKind> = record.score.notes.iter().map(|n| n.kind).collect();
    assert_eq!(notes, vec![NoteKind::BelowVwap, NoteKind::Overbought]);
}

#[test]
fn test_quiet_series_scores_zero() {
    let outcome = SignalEngine::evaluate(&quiet_series("QUIET", 100.0, 200_000.0), "X", &test_config(1));
    let TickerOutcome::Scored(record) = outcome else {
        panic!("expected a scored ticker");
    };
    assert_eq!(record.stars(), 0);
    assert_eq!(record.score.outlook, Outlook::NeutralWait);
}

#[test]
fn test_rejected_ticker_is_not_scored() {
    let outcome = SignalEngine::evaluate(&quiet_series("PENNY", 2.0, 200_000.0), "X", &test_config(1));
    let TickerOutcome::Rejected(rejection) = outcome else {
        panic!("expected a rejection");
    };
    assert_eq!(rejection.reason, RejectionReason::PennyPrice);
    assert_eq!(rejection.symbol, "PENNY");
    assert_eq!(rejection.indicators.map(|v| v.close), Some(Some(2.0)));
}

#[test]
fn test_short_history_rejected() {
    let outcome = SignalEngine::evaluate(
        &series("NEW", flat_bars(15, 100.0, 1_000_000.0)),
        "X",
        &test_config(1),
    );
    let TickerOutcome::Rejected(rejection) = outcome else {
        panic!("expected a rejection");
    };
    assert_eq!(rejection.reason, RejectionReason::InsufficientHistory);
}

#[test]
fn test_unavailable_outcome() {
    let outcome = TickerOutcome::unavailable("GONE", "X", "no data for GONE");
    assert_eq!(outcome.symbol(), "GONE");
    let TickerOutcome::Rejected(rejection) = outcome else {
        panic!("expected a rejection");
    };
    assert_eq!(rejection.reason, RejectionReason::DataUnavailable);
    assert!(rejection.indicators.is_none());
}
