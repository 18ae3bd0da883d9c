//! HTTP handlers for the citizen and government dashboards

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::{City, GaussianNoise, GovernmentView};

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::middleware::CurrentSession;
use crate::services::dashboard::{CitizenDashboard, DashboardService, GovernmentDashboard};
use crate::AppState;

/// Query parameters shared by the dashboard endpoints
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub city: Option<String>,
    pub view: Option<String>,
}

/// Resolve the requested city, falling back to the configured default
pub(crate) fn resolve_city(state: &AppState, city: Option<&str>) -> AppResult<City> {
    match city {
        Some(name) => Ok(name.parse::<City>()?),
        None => Ok(state.config.dashboard.default_city),
    }
}

/// Citizen dashboard
pub async fn citizen_dashboard(
    State(state): State<AppState>,
    session: CurrentSession,
    ApiQuery(query): ApiQuery<DashboardQuery>,
) -> AppResult<Json<CitizenDashboard>> {
    let city = resolve_city(&state, query.city.as_deref())?;
    let live = session.0.live_aqi;
    let mut noise = GaussianNoise::from_entropy();

    let service = DashboardService::new(&state.config.dashboard);
    let dashboard = service.citizen_view(city, live, &mut noise)?;
    Ok(Json(dashboard))
}

/// Government dashboard for the requested sub-view
pub async fn government_dashboard(
    State(state): State<AppState>,
    session: CurrentSession,
    ApiQuery(query): ApiQuery<DashboardQuery>,
) -> AppResult<Json<GovernmentDashboard>> {
    let city = resolve_city(&state, query.city.as_deref())?;
    let view = match query.view.as_deref() {
        Some(slug) => slug.parse::<GovernmentView>()?,
        None => GovernmentView::default(),
    };
    let live = session.0.live_aqi;
    let mut noise = GaussianNoise::from_entropy();

    let service = DashboardService::new(&state.config.dashboard);
    let dashboard = service.government_view(city, view, live, &mut noise)?;
    Ok(Json(dashboard))
}
