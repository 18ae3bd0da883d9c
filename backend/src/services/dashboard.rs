//! Dashboard composition for the citizen and government views
//!
//! Every view is rebuilt from scratch per request from the live reading, the
//! sample tables and a fresh forecast.

use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{
    classify, hotspots, monthly_trend, policies, safe_zones, sources, AreaRecord, City,
    DashboardMode, GovernmentView, NoiseSource, PolicyRecord, RiskCategory, Severity,
    SourceRecord, TrendPoint, PM10_PER_AQI, PM25_PER_AQI,
};

use crate::config::DashboardConfig;
use crate::error::AppResult;
use crate::services::forecast::{ForecastResponse, ForecastService};

/// Spread of the synthetic day-over-day change
pub const DAILY_DELTA_STD_DEV: f64 = 5.0;
/// Fixed uplift shown as the next-24h peak
pub const NEXT_DAY_PEAK_UPLIFT: f64 = 15.0;
/// Safe areas highlighted on the citizen view
pub const TOP_SAFE_ZONES: usize = 3;
/// Hotspots listed on the government overview
pub const TOP_HOTSPOTS: usize = 4;

/// Live AQI reading with its band
#[derive(Debug, Clone, Serialize)]
pub struct LiveReading {
    pub value: f64,
    /// Truncated value for display
    pub display_value: i64,
    pub severity: Severity,
    pub label: String,
    pub color: String,
}

impl LiveReading {
    pub fn from_aqi(aqi: f64) -> AppResult<Self> {
        let classification = classify(aqi)?;
        Ok(Self {
            value: aqi,
            display_value: aqi.trunc() as i64,
            severity: classification.severity,
            label: classification.label,
            color: classification.color,
        })
    }
}

/// Banner severity
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}

/// Health banner shown above every view
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HealthAlert {
    pub level: AlertLevel,
    pub message: String,
}

impl HealthAlert {
    /// Critical above 300, warning above 200, informational otherwise
    pub fn for_aqi(aqi: f64) -> Self {
        let level = if aqi > 300.0 {
            AlertLevel::Critical
        } else if aqi > 200.0 {
            AlertLevel::Warning
        } else {
            AlertLevel::Info
        };

        Self {
            level,
            message: Severity::from_aqi(aqi).health_advisory().to_string(),
        }
    }
}

/// Headline metric tiles
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KeyMetrics {
    pub current_aqi: i64,
    pub delta_from_yesterday: i64,
    pub pm25: i64,
    pub pm10: i64,
    pub next_24h_peak: i64,
}

impl KeyMetrics {
    pub fn from_aqi(aqi: f64, delta: f64) -> Self {
        Self {
            current_aqi: aqi.trunc() as i64,
            delta_from_yesterday: delta.trunc() as i64,
            pm25: (aqi * PM25_PER_AQI).trunc() as i64,
            pm10: (aqi * PM10_PER_AQI).trunc() as i64,
            next_24h_peak: (aqi + NEXT_DAY_PEAK_UPLIFT).trunc() as i64,
        }
    }
}

/// Area row with its band resolved
#[derive(Debug, Clone, Serialize)]
pub struct AreaSummary {
    pub name: String,
    pub aqi: u32,
    pub severity: Severity,
    pub label: String,
    pub color: String,
    pub category: RiskCategory,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl From<&AreaRecord> for AreaSummary {
    fn from(area: &AreaRecord) -> Self {
        let severity = area.severity();
        Self {
            name: area.name.clone(),
            aqi: area.aqi,
            severity,
            label: severity.label().to_string(),
            color: severity.color().to_string(),
            category: area.category,
            latitude: area.location.latitude,
            longitude: area.location.longitude,
        }
    }
}

/// Fields common to every view
#[derive(Debug, Clone, Serialize)]
pub struct DashboardHeader {
    pub city: City,
    pub mode: DashboardMode,
    pub live: LiveReading,
    pub alert: HealthAlert,
    pub refresh_interval_secs: u64,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CitizenDashboard {
    #[serde(flatten)]
    pub header: DashboardHeader,
    pub metrics: KeyMetrics,
    /// Cleanest area, if any is below the safe threshold
    pub best_area: Option<AreaSummary>,
    pub safe_zones: Vec<AreaSummary>,
    /// All areas, cleanest first
    pub areas: Vec<AreaSummary>,
    pub forecast: ForecastResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct GovernmentDashboard {
    #[serde(flatten)]
    pub header: DashboardHeader,
    pub view: GovernmentView,
    pub panel: GovernmentPanel,
}

/// Content of a government sub-view
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GovernmentPanel {
    Overview {
        metrics: KeyMetrics,
        sources: Vec<SourceRecord>,
        trend: Vec<TrendPoint>,
        hotspots: Vec<AreaSummary>,
    },
    Forecast {
        forecast: ForecastResponse,
    },
    Sources {
        sources: Vec<SourceRecord>,
    },
    PolicyImpact {
        policies: Vec<PolicyRecord>,
    },
}

/// Assembles dashboard views
pub struct DashboardService<'a> {
    config: &'a DashboardConfig,
}

impl<'a> DashboardService<'a> {
    pub fn new(config: &'a DashboardConfig) -> Self {
        Self { config }
    }

    fn header(&self, city: City, mode: DashboardMode, live_aqi: f64) -> AppResult<DashboardHeader> {
        Ok(DashboardHeader {
            city,
            mode,
            live: LiveReading::from_aqi(live_aqi)?,
            alert: HealthAlert::for_aqi(live_aqi),
            refresh_interval_secs: self.config.refresh_interval_secs,
            generated_at: Utc::now(),
        })
    }

    /// Citizen view: safe areas, area comparison and a short forecast
    pub fn citizen_view<N: NoiseSource + ?Sized>(
        &self,
        city: City,
        live_aqi: f64,
        noise: &mut N,
    ) -> AppResult<CitizenDashboard> {
        let header = self.header(city, DashboardMode::Citizen, live_aqi)?;
        let metrics = KeyMetrics::from_aqi(live_aqi, noise.gaussian(DAILY_DELTA_STD_DEV));

        let areas = hotspots();
        let safe: Vec<AreaSummary> = safe_zones(&areas).iter().map(AreaSummary::from).collect();
        let best_area = safe.first().cloned();

        let mut all: Vec<AreaSummary> = areas.iter().map(AreaSummary::from).collect();
        all.sort_by_key(|area| area.aqi);

        let forecast = ForecastService::generate(
            i64::from(self.config.citizen_horizon_hours),
            Local::now().naive_local(),
            noise,
        )?;

        Ok(CitizenDashboard {
            header,
            metrics,
            best_area,
            safe_zones: safe.into_iter().take(TOP_SAFE_ZONES).collect(),
            areas: all,
            forecast,
        })
    }

    /// Government view for one of its sub-views
    pub fn government_view<N: NoiseSource + ?Sized>(
        &self,
        city: City,
        view: GovernmentView,
        live_aqi: f64,
        noise: &mut N,
    ) -> AppResult<GovernmentDashboard> {
        let header = self.header(city, DashboardMode::Government, live_aqi)?;

        let panel = match view {
            GovernmentView::Overview => GovernmentPanel::Overview {
                metrics: KeyMetrics::from_aqi(live_aqi, noise.gaussian(DAILY_DELTA_STD_DEV)),
                sources: sources(),
                trend: monthly_trend(),
                hotspots: hotspots()
                    .iter()
                    .take(TOP_HOTSPOTS)
                    .map(AreaSummary::from)
                    .collect(),
            },
            GovernmentView::Forecast => GovernmentPanel::Forecast {
                forecast: ForecastService::generate(
                    i64::from(self.config.government_horizon_hours),
                    Local::now().naive_local(),
                    noise,
                )?,
            },
            GovernmentView::Sources => GovernmentPanel::Sources { sources: sources() },
            GovernmentView::PolicyImpact => GovernmentPanel::PolicyImpact {
                policies: policies(),
            },
        };

        Ok(GovernmentDashboard {
            header,
            view,
            panel,
        })
    }
}
