//! Unit tests for star scoring

use stocksense::config::ScoringConfig;
use stocksense::models::indicators::{IndicatorKind, IndicatorVector};
use stocksense::models::rules::{Comparison, Condition, NoteKind, ScoringRule};
use stocksense::models::score::Outlook;
use stocksense::signals::rules::{
    MODERATE_INFLOW, STRATEGIC_DIP_BUY, STRONG_ACCUMULATION, TREND_CONFIRMATION, VOLUME_EXPLOSION,
};
use stocksense::signals::scoring::{clamp_stars, ScoringEngine};

fn values(
    rvol: f64,
    cmf: f64,
    mfi: f64,
    close: f64,
    vwap: f64,
    sma200: f64,
) -> IndicatorVector {
    IndicatorVector::default()
        .with(IndicatorKind::Rvol, Some(rvol))
        .with(IndicatorKind::Cmf, Some(cmf))
        .with(IndicatorKind::Mfi, Some(mfi))
        .with(IndicatorKind::Close, Some(close))
        .with(IndicatorKind::Vwap, Some(vwap))
        .with(IndicatorKind::Sma200, Some(sma200))
        .with_bar_count(250)
}

#[test]
fn test_all_rules_clamped_to_five() {
    let score = ScoringEngine::score(
        &values(2.0, 0.2, 25.0, 50.0, 45.0, 40.0),
        &ScoringConfig::default(),
    );
    assert_eq!(score.raw_stars, 6);
    assert_eq!(score.stars, 5);
    assert_eq!(score.outlook, Outlook::StrongBuy);

    let rules: Vec<&str> = score.hits.iter().map(|h| h.rule.as_str()).collect();
    assert_eq!(
        rules,
        vec![VOLUME_EXPLOSION, STRONG_ACCUMULATION, TREND_CONFIRMATION, STRATEGIC_DIP_BUY]
    );
    // The cap is reached before the last rule counts
    assert_eq!(score.hit(STRATEGIC_DIP_BUY).map(|h| h.awarded), Some(0));
    assert_eq!(score.hits.iter().map(|h| u32::from(h.awarded)).sum::<u32>(), 5);
}

#[test]
fn test_cmf_tiers_are_exclusive() {
    let strong = ScoringEngine::score(
        &values(1.0, 0.3, 50.0, 10.0, 20.0, 5.0),
        &ScoringConfig::default(),
    );
    assert!(strong.hit(STRONG_ACCUMULATION).is_some());
    assert!(strong.hit(MODERATE_INFLOW).is_none());
    assert_eq!(strong.stars, 2);

    let moderate = ScoringEngine::score(
        &values(1.0, 0.1, 50.0, 10.0, 20.0, 5.0),
        &ScoringConfig::default(),
    );
    assert!(moderate.hit(STRONG_ACCUMULATION).is_none());
    assert!(moderate.hit(MODERATE_INFLOW).is_some());
    assert_eq!(moderate.stars, 1);
    assert_eq!(moderate.outlook, Outlook::NeutralWait);
}

#[test]
fn test_thresholds_are_strict() {
    let score = ScoringEngine::score(
        &values(1.5, 0.05, 30.0, 20.0, 20.0, 10.0),
        &ScoringConfig::default(),
    );
    assert_eq!(score.stars, 0);
    assert!(score.hits.is_empty());
}

#[test]
fn test_undefined_values_never_satisfy() {
    let score = ScoringEngine::score(&IndicatorVector::default(), &ScoringConfig::default());
    assert_eq!(score.stars, 0);
    assert_eq!(score.raw_stars, 0);
    assert!(score.hits.is_empty());
    assert!(score.notes.is_empty());

    // Dip buy needs both MFI and SMA200; SMA200 is missing
    let partial = IndicatorVector::default()
        .with(IndicatorKind::Mfi, Some(10.0))
        .with(IndicatorKind::Close, Some(50.0));
    let score = ScoringEngine::score(&partial, &ScoringConfig::default());
    assert!(score.hit(STRATEGIC_DIP_BUY).is_none());
}

#[test]
fn test_hit_readings_record_inputs() {
    let score = ScoringEngine::score(
        &values(3.0, 0.0, 50.0, 10.0, 20.0, 5.0),
        &ScoringConfig::default(),
    );
    let hit = score.hit(VOLUME_EXPLOSION).unwrap();
    assert_eq!(hit.readings.len(), 1);
    assert_eq!(hit.readings[0].indicator, IndicatorKind::Rvol);
    assert_eq!(hit.readings[0].value, 3.0);
    assert_eq!(hit.awarded, 2);
}

#[test]
fn test_notes() {
    let score = ScoringEngine::score(
        &values(1.0, -0.2, 80.0, 10.0, 12.0, 5.0),
        &ScoringConfig::default(),
    );
    let kinds: Vec<NoteKind> = score.notes.iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![NoteKind::Distribution, NoteKind::BelowVwap, NoteKind::Overbought]
    );
    assert_eq!(score.stars, 0);
}

#[test]
fn test_custom_rule_with_any_of() {
    let config = ScoringConfig {
        rules: vec![ScoringRule::new("oversold", "Oversold", 3)
            .any_of()
            .when(Condition::threshold(IndicatorKind::Rsi, Comparison::LessThan, 30.0))
            .when(Condition::threshold(IndicatorKind::Mfi, Comparison::LessThan, 20.0))],
        notes: Vec::new(),
        max_stars: 5,
    };
    let values = IndicatorVector::default()
        .with(IndicatorKind::Rsi, Some(45.0))
        .with(IndicatorKind::Mfi, Some(10.0));
    let score = ScoringEngine::score(&values, &config);
    assert_eq!(score.stars, 3);
    assert_eq!(score.outlook, Outlook::Accumulation);
}

#[test]
fn test_clamp_stars() {
    assert_eq!(clamp_stars(0, 5), 0);
    assert_eq!(clamp_stars(5, 5), 5);
    assert_eq!(clamp_stars(6, 5), 5);
    assert_eq!(clamp_stars(u32::MAX, 5), 5);
}

#[test]
fn test_non_finite_values_are_undefined() {
    let values = IndicatorVector::default().with(IndicatorKind::Rvol, Some(f64::NAN));
    assert!(values.rvol.is_none());
}
