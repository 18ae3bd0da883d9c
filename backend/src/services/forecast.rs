//! Forecast service wrapping the synthetic forecast generator

use chrono::NaiveDateTime;
use serde::Serialize;
use shared::{forecast, label_forecast, ForecastPoint, ForecastSummary, NoiseSource};

use crate::error::AppResult;

/// Forecast payload returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    pub horizon_hours: u32,
    pub points: Vec<ForecastPoint>,
    pub summary: Option<ForecastSummary>,
}

/// Builds labelled forecasts
pub struct ForecastService;

impl ForecastService {
    /// Generate a forecast of `hours` points labelled from `start`
    pub fn generate<N: NoiseSource + ?Sized>(
        hours: i64,
        start: NaiveDateTime,
        noise: &mut N,
    ) -> AppResult<ForecastResponse> {
        let mut points = forecast(hours, noise)?;
        label_forecast(&mut points, start);
        let summary = ForecastSummary::from_points(&points);

        Ok(ForecastResponse {
            horizon_hours: points.len() as u32,
            points,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use shared::ZeroNoise;

    fn start() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_generate_labels_and_summarizes() {
        let response = ForecastService::generate(24, start(), &mut ZeroNoise).unwrap();
        assert_eq!(response.horizon_hours, 24);
        assert_eq!(response.points[0].time_label.as_deref(), Some("01 Jan 00:00"));

        let summary = response.summary.unwrap();
        // sin(i/12) peaks at i = 19 (19/12 ≈ π/2) within a day
        assert_eq!(summary.peak_hour, 19);
        assert_eq!(summary.best_hour, 0);
        assert_eq!(summary.tomorrow_9am_aqi, Some(response.points[9].aqi));
    }

    #[test]
    fn test_generate_rejects_zero_horizon() {
        let err = ForecastService::generate(0, start(), &mut ZeroNoise).unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "hours"));
    }
}
