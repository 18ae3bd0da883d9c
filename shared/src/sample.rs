//! Hard-coded sample tables shown by the dashboard
//!
//! There is no ingestion pipeline; these tables are the whole data set.

use rust_decimal::Decimal;

use crate::models::{AreaRecord, PolicyRecord, PolicyStatus, RiskCategory, SourceRecord, TrendPoint};
use crate::types::GpsCoordinates;

fn coords(latitude: i64, longitude: i64) -> GpsCoordinates {
    // Four decimal places
    GpsCoordinates::new(Decimal::new(latitude, 4), Decimal::new(longitude, 4))
}

/// Monitored hotspots, ordered from most to least polluted
pub fn hotspots() -> Vec<AreaRecord> {
    [
        ("Anand Vihar", 456, 286469, 773163, RiskCategory::HighRisk),
        ("RK Puram", 389, 285632, 771837, RiskCategory::HighRisk),
        ("Dwarka", 342, 285921, 770460, RiskCategory::HighRisk),
        ("Rohini", 298, 287495, 770736, RiskCategory::ModerateRisk),
        ("Punjabi Bagh", 276, 286692, 771310, RiskCategory::ModerateRisk),
        ("Lodhi Road", 189, 285919, 772189, RiskCategory::Safe),
        ("ITO", 156, 286273, 772502, RiskCategory::Safe),
        ("Nehru Nagar", 123, 285677, 772545, RiskCategory::Safe),
    ]
    .into_iter()
    .map(|(name, aqi, lat, lon, category)| AreaRecord {
        name: name.to_string(),
        aqi,
        location: coords(lat, lon),
        category,
    })
    .collect()
}

/// Pollution source attribution
pub fn sources() -> Vec<SourceRecord> {
    [
        ("Vehicular", 35, Decimal::new(1425, 1), "#3b82f6"),
        ("Industrial", 25, Decimal::new(1020, 1), "#8b5cf6"),
        ("Construction", 20, Decimal::new(815, 1), "#f59e0b"),
        ("Biomass", 12, Decimal::new(489, 1), "#ef4444"),
        ("Others", 8, Decimal::new(326, 1), "#6b7280"),
    ]
    .into_iter()
    .map(|(source, percentage, emission_rate, color)| SourceRecord {
        source: source.to_string(),
        percentage,
        emission_rate,
        color: color.to_string(),
    })
    .collect()
}

/// Policy interventions and their estimated effect
pub fn policies() -> Vec<PolicyRecord> {
    [
        ("Odd-Even Scheme", -15, PolicyStatus::Active, Decimal::new(78, 2)),
        ("Construction Ban", -22, PolicyStatus::Active, Decimal::new(92, 2)),
        ("Stubble Ban", -8, PolicyStatus::Partial, Decimal::new(45, 2)),
        ("BS-VI Norms", -18, PolicyStatus::Active, Decimal::new(83, 2)),
    ]
    .into_iter()
    .map(|(policy, impact_percent, status, cost_effectiveness)| PolicyRecord {
        policy: policy.to_string(),
        impact_percent,
        status,
        cost_effectiveness,
    })
    .collect()
}

/// Six-month average AQI trend
pub fn monthly_trend() -> Vec<TrendPoint> {
    [
        ("Oct", 320, 0),
        ("Nov", 380, 1),
        ("Dec", 340, 1),
        ("Jan", 290, 2),
        ("Feb", 250, 2),
        ("Mar", 210, 2),
    ]
    .into_iter()
    .map(|(month, aqi, active_policies)| TrendPoint {
        month: month.to_string(),
        aqi,
        active_policies,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{safe_zones, Severity};

    #[test]
    fn test_hotspots_table() {
        let areas = hotspots();
        assert_eq!(areas.len(), 8);
        assert_eq!(areas[0].name, "Anand Vihar");
        assert_eq!(areas[0].aqi, 456);
        assert_eq!(areas[0].location.latitude, Decimal::new(286469, 4));
        assert_eq!(areas[0].severity(), Severity::Severe);
        assert!(areas.windows(2).all(|w| w[0].aqi >= w[1].aqi));
    }

    #[test]
    fn test_safe_zones_of_sample_data() {
        let safe = safe_zones(&hotspots());
        let names: Vec<&str> = safe.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Nehru Nagar", "ITO", "Lodhi Road"]);
    }

    #[test]
    fn test_source_percentages_sum_to_100() {
        let total: u32 = sources().iter().map(|s| s.percentage).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_policies_are_reductions() {
        let all = policies();
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|p| p.impact_percent < 0));
        assert!(all.iter().all(|p| p.impact_color() == "#10b981"));
        assert_eq!(all[2].status, PolicyStatus::Partial);
    }

    #[test]
    fn test_trend_table() {
        let trend = monthly_trend();
        let months: Vec<&str> = trend.iter().map(|t| t.month.as_str()).collect();
        assert_eq!(months, vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]);
        assert_eq!(trend[1].aqi, 380);
    }
}
