//! Forecast models

use serde::{Deserialize, Serialize};

/// One hourly point of a synthetic forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    /// Hours from now
    pub hour: u32,
    /// Predicted AQI, clamped to the forecast range
    pub aqi: f64,
    /// Estimated PM2.5 in µg/m³
    pub pm25: f64,
    /// Wall-clock label such as "17 Oct 14:00", filled in by the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_label: Option<String>,
}

/// Peak, best and next-morning readings of a forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastSummary {
    pub peak_aqi: f64,
    pub peak_hour: u32,
    pub best_aqi: f64,
    pub best_hour: u32,
    /// Reading at hour 9, present when the horizon reaches it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tomorrow_9am_aqi: Option<f64>,
}

/// Index of the "tomorrow 9 AM" point in an hourly forecast
pub const TOMORROW_9AM_INDEX: usize = 9;

impl ForecastSummary {
    /// Summarize a forecast. Ties keep the earliest hour. Returns `None` for
    /// an empty forecast.
    pub fn from_points(points: &[ForecastPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut peak = first;
        let mut best = first;
        for point in &points[1..] {
            if point.aqi > peak.aqi {
                peak = point;
            }
            if point.aqi < best.aqi {
                best = point;
            }
        }

        Some(Self {
            peak_aqi: peak.aqi,
            peak_hour: peak.hour,
            best_aqi: best.aqi,
            best_hour: best.hour,
            tomorrow_9am_aqi: points.get(TOMORROW_9AM_INDEX).map(|p| p.aqi),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(hour: u32, aqi: f64) -> ForecastPoint {
        ForecastPoint {
            hour,
            aqi,
            pm25: aqi * 0.45,
            time_label: None,
        }
    }

    #[test]
    fn test_summary_empty() {
        assert!(ForecastSummary::from_points(&[]).is_none());
    }

    #[test]
    fn test_summary_peak_and_best() {
        let points = vec![point(0, 200.0), point(1, 310.0), point(2, 120.0), point(3, 250.0)];
        let summary = ForecastSummary::from_points(&points).unwrap();
        assert_eq!(summary.peak_aqi, 310.0);
        assert_eq!(summary.peak_hour, 1);
        assert_eq!(summary.best_aqi, 120.0);
        assert_eq!(summary.best_hour, 2);
        assert!(summary.tomorrow_9am_aqi.is_none());
    }

    #[test]
    fn test_summary_ties_keep_first() {
        let points = vec![point(0, 100.0), point(1, 100.0)];
        let summary = ForecastSummary::from_points(&points).unwrap();
        assert_eq!(summary.peak_hour, 0);
        assert_eq!(summary.best_hour, 0);
    }

    #[test]
    fn test_summary_tomorrow_9am() {
        let points: Vec<ForecastPoint> = (0..24).map(|h| point(h, 100.0 + h as f64)).collect();
        let summary = ForecastSummary::from_points(&points).unwrap();
        assert_eq!(summary.tomorrow_9am_aqi, Some(109.0));
        assert_eq!(summary.peak_hour, 23);
    }
}
