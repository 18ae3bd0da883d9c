//! City area (hotspot) models

use serde::{Deserialize, Serialize};

use crate::models::Severity;
use crate::types::GpsCoordinates;

/// Monitored area within a city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaRecord {
    pub name: String,
    pub aqi: u32,
    pub location: GpsCoordinates,
    pub category: RiskCategory,
}

impl AreaRecord {
    pub fn severity(&self) -> Severity {
        Severity::from_aqi(f64::from(self.aqi))
    }
}

/// Coarse risk grouping shown on the map
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    HighRisk,
    ModerateRisk,
    Safe,
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskCategory::HighRisk => write!(f, "High Risk"),
            RiskCategory::ModerateRisk => write!(f, "Moderate Risk"),
            RiskCategory::Safe => write!(f, "Safe"),
        }
    }
}

/// Areas at or above this AQI are never recommended
pub const SAFE_ZONE_THRESHOLD: u32 = 200;

/// Areas with AQI strictly below [`SAFE_ZONE_THRESHOLD`], cleanest first
pub fn safe_zones(areas: &[AreaRecord]) -> Vec<AreaRecord> {
    let mut safe: Vec<AreaRecord> = areas
        .iter()
        .filter(|area| area.aqi < SAFE_ZONE_THRESHOLD)
        .cloned()
        .collect();
    safe.sort_by_key(|area| area.aqi);
    safe
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn area(name: &str, aqi: u32) -> AreaRecord {
        AreaRecord {
            name: name.to_string(),
            aqi,
            location: GpsCoordinates::new(Decimal::ZERO, Decimal::ZERO),
            category: RiskCategory::Safe,
        }
    }

    #[test]
    fn test_safe_zones_filters_and_sorts() {
        let areas = vec![area("A", 250), area("B", 199), area("C", 120), area("D", 200)];
        let safe = safe_zones(&areas);
        let names: Vec<&str> = safe.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B"]);
    }

    #[test]
    fn test_safe_zones_empty_when_all_polluted() {
        let areas = vec![area("A", 300), area("B", 456)];
        assert!(safe_zones(&areas).is_empty());
    }

    #[test]
    fn test_area_severity() {
        assert_eq!(area("X", 456).severity(), Severity::Severe);
        assert_eq!(area("Y", 189).severity(), Severity::Moderate);
    }
}
