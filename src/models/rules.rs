//! Declarative scoring rule table.

use crate::models::indicators::{IndicatorKind, IndicatorVector};
use serde::{Deserialize, Serialize};

/// One entry of the star-awarding rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRule {
    pub name: String,
    pub label: String,
    pub stars: u8,
    /// Rules sharing a group are mutually exclusive: the first satisfied
    /// rule of the group in table order is the only one that hits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub operator: LogicalOperator,
    pub conditions: Vec<Condition>,
}

impl ScoringRule {
    pub fn new(name: &str, label: &str, stars: u8) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            stars,
            group: None,
            operator: LogicalOperator::And,
            conditions: Vec::new(),
        }
    }

    pub fn in_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn when(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn any_of(mut self) -> Self {
        self.operator = LogicalOperator::Or;
        self
    }
}

/// A zero-star narrative observation recorded next to the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRule {
    pub kind: NoteKind,
    pub label: String,
    pub condition: Condition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoteKind {
    Distribution,
    BelowVwap,
    Overbought,
}

/// Indicator comparison condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub indicator: IndicatorKind,
    pub comparison: Comparison,
    pub operand: Operand,
}

impl Condition {
    pub fn threshold(indicator: IndicatorKind, comparison: Comparison, value: f64) -> Self {
        Self {
            indicator,
            comparison,
            operand: Operand::Threshold(value),
        }
    }

    pub fn against(indicator: IndicatorKind, comparison: Comparison, other: IndicatorKind) -> Self {
        Self {
            indicator,
            comparison,
            operand: Operand::Indicator(other),
        }
    }

    /// Evaluates the condition. An undefined value on either side fails.
    pub fn evaluate(&self, values: &IndicatorVector) -> bool {
        let Some(lhs) = values.get(self.indicator) else {
            return false;
        };
        let rhs = match self.operand {
            Operand::Threshold(t) => Some(t),
            Operand::Indicator(kind) => values.get(kind),
        };
        match rhs {
            Some(rhs) => self.comparison.compare(lhs, rhs),
            None => false,
        }
    }

    /// Indicators this condition reads, left-hand side first.
    pub fn inputs(&self) -> Vec<IndicatorKind> {
        match self.operand {
            Operand::Threshold(_) => vec![self.indicator],
            Operand::Indicator(kind) => vec![self.indicator, kind],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    Threshold(f64),
    Indicator(IndicatorKind),
}

/// Comparison operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Comparison {
    GreaterThan,
    LessThan,
    GreaterEqual,
    LessEqual,
}

impl Comparison {
    pub fn compare(&self, lhs: f64, rhs: f64) -> bool {
        // NaN compares false under every operator
        match self {
            Comparison::GreaterThan => lhs > rhs,
            Comparison::LessThan => lhs < rhs,
            Comparison::GreaterEqual => lhs >= rhs,
            Comparison::LessEqual => lhs <= rhs,
        }
    }
}

/// Logical operators for combining a rule's conditions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}
