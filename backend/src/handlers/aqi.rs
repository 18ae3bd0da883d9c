//! HTTP handlers for AQI classification and the live reading

use axum::Json;
use serde::{Deserialize, Serialize};
use shared::{classify, Band, Classification, AQI_BANDS};
use uuid::Uuid;

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::middleware::CurrentSession;
use crate::services::dashboard::{HealthAlert, LiveReading};

/// Query parameters for classification
#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub value: f64,
}

/// Classify a single AQI value
pub async fn classify_aqi(
    ApiQuery(query): ApiQuery<ClassifyQuery>,
) -> AppResult<Json<Classification>> {
    Ok(Json(classify(query.value)?))
}

/// List the severity bands
pub async fn list_bands() -> Json<&'static [Band]> {
    Json(&AQI_BANDS[..])
}

/// Live reading after one tick
#[derive(Debug, Serialize)]
pub struct LiveTickResponse {
    pub session_id: Uuid,
    pub reading: LiveReading,
    pub alert: HealthAlert,
}

/// Live reading after the tick applied by the session middleware
pub async fn live_tick(session: CurrentSession) -> AppResult<Json<LiveTickResponse>> {
    let value = session.0.live_aqi;

    Ok(Json(LiveTickResponse {
        session_id: session.0.id,
        reading: LiveReading::from_aqi(value)?,
        alert: HealthAlert::for_aqi(value),
    }))
}
