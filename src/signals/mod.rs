//! Safety gate, rule scoring and the per-ticker pipeline.

pub mod engine;
pub mod rules;
pub mod safety;
pub mod scoring;

pub use engine::{SignalEngine, TickerOutcome};
pub use rules::{default_note_rules, default_rules};
pub use safety::{SafetyFilter, SafetyInput};
pub use scoring::{clamp_stars, ScoringEngine};
