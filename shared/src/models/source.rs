//! Pollution source attribution models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share of pollution attributed to one source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceRecord {
    pub source: String,
    pub percentage: u32,
    pub emission_rate: Decimal,
    /// Bar color used by the dashboard charts
    pub color: String,
}

/// Monthly average AQI with the number of policies in force
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub month: String,
    pub aqi: u32,
    pub active_policies: u32,
}
