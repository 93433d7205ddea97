//! Shared data models spanning the engine layers.

pub mod bars;
pub mod indicators;
pub mod rules;
pub mod score;
pub mod screen;

pub use bars::{Bar, BarSeries, SeriesError};
pub use indicators::{IndicatorFrame, IndicatorKind, IndicatorVector};
pub use rules::{
    Comparison, Condition, LogicalOperator, NoteKind, NoteRule, Operand, ScoringRule,
};
pub use score::{Note, Outlook, Reading, RuleHit, ScoreResult};
pub use screen::{Rejection, RejectionReason, SafetyVerdict, ScreenResult, TickerRecord};
