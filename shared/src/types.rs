//! Common types used across the dashboard

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Cities selectable in the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum City {
    #[default]
    Delhi,
    Gurugram,
    Noida,
    Faridabad,
    Ghaziabad,
}

impl City {
    pub const ALL: [City; 5] = [
        City::Delhi,
        City::Gurugram,
        City::Noida,
        City::Faridabad,
        City::Ghaziabad,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            City::Delhi => "Delhi",
            City::Gurugram => "Gurugram",
            City::Noida => "Noida",
            City::Faridabad => "Faridabad",
            City::Ghaziabad => "Ghaziabad",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for City {
    type Err = ValidationError;

    /// Case-insensitive match on the city name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        City::ALL
            .into_iter()
            .find(|city| city.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownCity(s.to_string()))
    }
}

/// Which audience the dashboard is rendered for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DashboardMode {
    #[default]
    Government,
    Citizen,
}

impl std::str::FromStr for DashboardMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "government" => Ok(DashboardMode::Government),
            "citizen" => Ok(DashboardMode::Citizen),
            _ => Err(ValidationError::UnknownMode(s.to_string())),
        }
    }
}

/// Sub-views of the government dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GovernmentView {
    #[default]
    Overview,
    Forecast,
    Sources,
    PolicyImpact,
}

impl GovernmentView {
    pub const ALL: [GovernmentView; 4] = [
        GovernmentView::Overview,
        GovernmentView::Forecast,
        GovernmentView::Sources,
        GovernmentView::PolicyImpact,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            GovernmentView::Overview => "overview",
            GovernmentView::Forecast => "forecast",
            GovernmentView::Sources => "sources",
            GovernmentView::PolicyImpact => "policy_impact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GovernmentView::Overview => "Overview",
            GovernmentView::Forecast => "Forecast",
            GovernmentView::Sources => "Sources",
            GovernmentView::PolicyImpact => "Policy Impact",
        }
    }
}

impl std::str::FromStr for GovernmentView {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        GovernmentView::ALL
            .into_iter()
            .find(|view| view.slug() == wanted)
            .ok_or_else(|| ValidationError::UnknownView(s.to_string()))
    }
}
