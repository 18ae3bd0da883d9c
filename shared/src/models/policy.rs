//! Policy intervention models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A pollution-control policy and its estimated effect
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyRecord {
    pub policy: String,
    /// Change in AQI in percent; negative is a reduction
    pub impact_percent: i32,
    pub status: PolicyStatus,
    pub cost_effectiveness: Decimal,
}

impl PolicyRecord {
    /// Green for reductions, red otherwise
    pub fn impact_color(&self) -> &'static str {
        if self.impact_percent < 0 {
            "#10b981"
        } else {
            "#ef4444"
        }
    }
}

/// Enforcement status of a policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    Active,
    Partial,
    Inactive,
}

impl std::fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyStatus::Active => write!(f, "Active"),
            PolicyStatus::Partial => write!(f, "Partial"),
            PolicyStatus::Inactive => write!(f, "Inactive"),
        }
    }
}
