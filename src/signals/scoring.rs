//! Star scoring over the declarative rule table

use crate::config::ScoringConfig;
use crate::models::indicators::IndicatorVector;
use crate::models::rules::{LogicalOperator, ScoringRule};
use crate::models::score::{Note, Outlook, Reading, RuleHit, ScoreResult};
use std::collections::HashSet;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Score an admitted ticker's indicators.
    ///
    /// Every satisfied rule is recorded as a hit, even once the cap is
    /// reached; `awarded` on each hit shows what it contributed to the
    /// capped total.
    pub fn score(values: &IndicatorVector, config: &ScoringConfig) -> ScoreResult {
        let mut claimed_groups: HashSet<&str> = HashSet::new();
        let mut hits = Vec::new();
        let mut raw_stars: u32 = 0;
        let mut counted: u8 = 0;

        for rule in &config.rules {
            if let Some(group) = rule.group.as_deref() {
                if claimed_groups.contains(group) {
                    continue;
                }
            }
            if !Self::is_satisfied(rule, values) {
                continue;
            }
            if let Some(group) = rule.group.as_deref() {
                claimed_groups.insert(group);
            }

            let awarded = rule.stars.min(config.max_stars.saturating_sub(counted));
            counted += awarded;
            raw_stars += u32::from(rule.stars);

            hits.push(RuleHit {
                rule: rule.name.clone(),
                label: rule.label.clone(),
                stars: rule.stars,
                awarded,
                readings: Self::readings(rule, values),
            });
        }

        let stars = clamp_stars(raw_stars, config.max_stars);
        let notes = config
            .notes
            .iter()
            .filter(|n| n.condition.evaluate(values))
            .map(|n| Note {
                kind: n.kind,
                label: n.label.clone(),
            })
            .collect();

        ScoreResult {
            stars,
            raw_stars,
            hits,
            outlook: Outlook::from_stars(stars),
            notes,
        }
    }

    fn is_satisfied(rule: &ScoringRule, values: &IndicatorVector) -> bool {
        if rule.conditions.is_empty() {
            return false;
        }
        match rule.operator {
            LogicalOperator::And => rule.conditions.iter().all(|c| c.evaluate(values)),
            LogicalOperator::Or => rule.conditions.iter().any(|c| c.evaluate(values)),
        }
    }

    fn readings(rule: &ScoringRule, values: &IndicatorVector) -> Vec<Reading> {
        let mut readings: Vec<Reading> = Vec::new();
        for kind in rule.conditions.iter().flat_map(|c| c.inputs()) {
            if readings.iter().any(|r| r.indicator == kind) {
                continue;
            }
            if let Some(value) = values.get(kind) {
                readings.push(Reading {
                    indicator: kind,
                    value,
                });
            }
        }
        readings
    }
}

/// Clamp a raw star sum to `[0, max_stars]`.
pub fn clamp_stars(raw: u32, max_stars: u8) -> u8 {
    raw.min(u32::from(max_stars)) as u8
}
