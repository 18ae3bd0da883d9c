//! HTTP handlers for the synthetic forecast

use axum::Json;
use chrono::Local;
use serde::Deserialize;
use shared::GaussianNoise;

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::services::forecast::{ForecastResponse, ForecastService};

/// Default horizon when none is requested
pub const DEFAULT_FORECAST_HOURS: i64 = 72;

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub hours: Option<i64>,
}

/// Generate a forecast for the requested horizon
pub async fn get_forecast(
    ApiQuery(query): ApiQuery<ForecastQuery>,
) -> AppResult<Json<ForecastResponse>> {
    let hours = query.hours.unwrap_or(DEFAULT_FORECAST_HOURS);
    let mut noise = GaussianNoise::from_entropy();
    let forecast = ForecastService::generate(hours, Local::now().naive_local(), &mut noise)?;
    Ok(Json(forecast))
}
