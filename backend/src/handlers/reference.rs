//! HTTP handlers for the static reference tables

use axum::Json;
use shared::{
    hotspots, monthly_trend, policies, safe_zones, sources, PolicyRecord, SourceRecord, TrendPoint,
};

use crate::services::dashboard::AreaSummary;

/// List all monitored areas
pub async fn list_areas() -> Json<Vec<AreaSummary>> {
    Json(hotspots().iter().map(AreaSummary::from).collect())
}

/// List areas below the safe threshold, cleanest first
pub async fn list_safe_zones() -> Json<Vec<AreaSummary>> {
    Json(safe_zones(&hotspots()).iter().map(AreaSummary::from).collect())
}

pub async fn list_sources() -> Json<Vec<SourceRecord>> {
    Json(sources())
}

pub async fn list_policies() -> Json<Vec<PolicyRecord>> {
    Json(policies())
}

pub async fn get_trend() -> Json<Vec<TrendPoint>> {
    Json(monthly_trend())
}
