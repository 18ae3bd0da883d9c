//! Server-rendered HTML dashboard page
//!
//! A single page with a sidebar (mode, city, view, live AQI) and the selected
//! view rendered as tables and CSS bars. Auto-refresh is a meta refresh at the
//! configured interval; the server never sleeps on behalf of the page.

use std::fmt::Write;

use axum::{extract::State, response::Html};
use serde::Deserialize;
use shared::{City, DashboardMode, GaussianNoise, GovernmentView};

use crate::error::{AppError, AppResult};
use crate::extract::ApiQuery;
use crate::handlers::dashboard::resolve_city;
use crate::middleware::CurrentSession;
use crate::services::dashboard::{
    AlertLevel, AreaSummary, CitizenDashboard, DashboardHeader, DashboardService,
    GovernmentDashboard, GovernmentPanel, KeyMetrics,
};
use crate::services::forecast::ForecastResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub mode: Option<String>,
    pub view: Option<String>,
    pub city: Option<String>,
    #[serde(default)]
    pub auto_refresh: bool,
}

/// Render the dashboard page
pub async fn dashboard_page(
    State(state): State<AppState>,
    session: CurrentSession,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> AppResult<Html<String>> {
    let city = resolve_city(&state, query.city.as_deref())?;
    let mode = match query.mode.as_deref() {
        Some(mode) => mode.parse::<DashboardMode>()?,
        None => DashboardMode::default(),
    };
    let view = match query.view.as_deref() {
        Some(slug) => slug.parse::<GovernmentView>()?,
        None => GovernmentView::default(),
    };

    let live = session.0.live_aqi;
    let mut noise = GaussianNoise::from_entropy();
    let service = DashboardService::new(&state.config.dashboard);

    let page = PageContext {
        city,
        mode,
        view,
        auto_refresh: query.auto_refresh,
    };

    let html = match mode {
        DashboardMode::Citizen => {
            let dashboard = service.citizen_view(city, live, &mut noise)?;
            render_citizen(&page, &dashboard)
        }
        DashboardMode::Government => {
            let dashboard = service.government_view(city, view, live, &mut noise)?;
            render_government(&page, &dashboard)
        }
    }
    .map_err(|e| AppError::Internal(format!("Failed to render page: {}", e)))?;

    Ok(Html(html))
}

/// Selections that drive links on the page
struct PageContext {
    city: City,
    mode: DashboardMode,
    view: GovernmentView,
    auto_refresh: bool,
}

impl PageContext {
    fn mode_slug(mode: DashboardMode) -> &'static str {
        match mode {
            DashboardMode::Government => "government",
            DashboardMode::Citizen => "citizen",
        }
    }

    fn link(&self, mode: DashboardMode, view: GovernmentView, city: City, auto_refresh: bool) -> String {
        format!(
            "/?mode={}&view={}&city={}&auto_refresh={}",
            Self::mode_slug(mode),
            view.slug(),
            city.name().to_lowercase(),
            auto_refresh
        )
    }

    fn with_mode(&self, mode: DashboardMode) -> String {
        self.link(mode, self.view, self.city, self.auto_refresh)
    }

    fn with_view(&self, view: GovernmentView) -> String {
        self.link(self.mode, view, self.city, self.auto_refresh)
    }

    fn with_city(&self, city: City) -> String {
        self.link(self.mode, self.view, city, self.auto_refresh)
    }

    fn toggled_refresh(&self) -> String {
        self.link(self.mode, self.view, self.city, !self.auto_refresh)
    }
}

const STYLE: &str = r#"
body { margin: 0; font-family: sans-serif; color: white;
       background: linear-gradient(135deg, #1e3a8a 0%, #3b82f6 100%); min-height: 100vh; }
a { color: #bfdbfe; }
.layout { display: flex; }
.sidebar { width: 240px; padding: 2rem 1rem; background: rgba(0,0,0,0.2); }
.main { flex: 1; padding: 1rem 2rem; }
.metric { display: inline-block; background: rgba(255,255,255,0.1); padding: 15px;
          border-radius: 10px; margin: 4px; min-width: 160px; }
.alert { padding: 12px; border-radius: 8px; margin: 12px 0; }
.alert.info { background: rgba(59,130,246,0.3); }
.alert.warning { background: rgba(245,158,11,0.3); border: 2px solid #f59e0b; }
.alert.critical { background: rgba(239,68,68,0.2); border: 2px solid #ef4444; }
.safe-zone { background: linear-gradient(135deg, #10b981 0%, #059669 100%);
             padding: 20px; border-radius: 15px; margin: 10px 0; }
.bar { height: 18px; border-radius: 4px; }
table { border-collapse: collapse; width: 100%; }
td, th { padding: 6px 10px; text-align: left; border-bottom: 1px solid rgba(255,255,255,0.1); }
.selected { font-weight: bold; text-decoration: none; color: white; }
footer { text-align: center; color: #93c5fd; padding: 1rem; }
"#;

fn render_shell(
    page: &PageContext,
    header: &DashboardHeader,
    body: &str,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "<!DOCTYPE html><html><head><meta charset=\"utf-8\">")?;
    writeln!(out, "<title>AirSense - Pollution Dashboard</title>")?;
    if page.auto_refresh {
        writeln!(
            out,
            "<meta http-equiv=\"refresh\" content=\"{}\">",
            header.refresh_interval_secs
        )?;
    }
    writeln!(out, "<style>{}</style></head><body><div class=\"layout\">", STYLE)?;

    // Sidebar
    writeln!(out, "<nav class=\"sidebar\"><h3>AirSense</h3><p>Intelligent Pollution Monitoring</p>")?;
    writeln!(out, "<h4>Dashboard</h4><ul>")?;
    for (mode, title) in [
        (DashboardMode::Government, "Government Dashboard"),
        (DashboardMode::Citizen, "Citizen Dashboard"),
    ] {
        write_nav_item(&mut out, &page.with_mode(mode), title, mode == page.mode)?;
    }
    writeln!(out, "</ul><h4>City</h4><ul>")?;
    for city in City::ALL {
        write_nav_item(&mut out, &page.with_city(city), city.name(), city == page.city)?;
    }
    writeln!(out, "</ul>")?;
    if page.mode == DashboardMode::Government {
        writeln!(out, "<h4>View</h4><ul>")?;
        for view in GovernmentView::ALL {
            write_nav_item(&mut out, &page.with_view(view), view.title(), view == page.view)?;
        }
        writeln!(out, "</ul>")?;
    }
    writeln!(
        out,
        "<h4>Real-time AQI</h4><h1 style=\"text-align:center;color:{};\">{}</h1><p style=\"text-align:center;\">{}</p>",
        header.live.color, header.live.display_value, header.live.label
    )?;
    writeln!(
        out,
        "<p><small>Last updated: {}</small></p>",
        header.generated_at.format("%H:%M:%S")
    )?;
    writeln!(
        out,
        "<p><a href=\"{}\">Auto-refresh ({}s): {}</a></p></nav>",
        page.toggled_refresh(),
        header.refresh_interval_secs,
        if page.auto_refresh { "on" } else { "off" }
    )?;

    // Main
    writeln!(out, "<main class=\"main\"><h1 style=\"text-align:center;\">AirSense</h1>")?;
    let (class, prefix) = match header.alert.level {
        AlertLevel::Critical => ("critical", "HEALTH ALERT: "),
        AlertLevel::Warning => ("warning", "WARNING: "),
        AlertLevel::Info => ("info", ""),
    };
    writeln!(
        out,
        "<div class=\"alert {}\"><strong>{}</strong>{}</div>",
        class, prefix, header.alert.message
    )?;
    out.push_str(body);
    writeln!(
        out,
        "</main></div><footer>AirSense - Synthetic Pollution Monitoring | {}</footer></body></html>",
        header.city
    )?;
    Ok(out)
}

fn write_nav_item(out: &mut String, href: &str, title: &str, selected: bool) -> std::fmt::Result {
    if selected {
        writeln!(out, "<li><a class=\"selected\" href=\"{}\">{}</a></li>", href, title)
    } else {
        writeln!(out, "<li><a href=\"{}\">{}</a></li>", href, title)
    }
}

fn write_metrics(out: &mut String, metrics: &KeyMetrics) -> std::fmt::Result {
    writeln!(out, "<section>")?;
    for (title, value, delta) in [
        (
            "Current AQI",
            metrics.current_aqi.to_string(),
            format!("{:+} from yesterday", metrics.delta_from_yesterday),
        ),
        ("PM2.5", format!("{} µg/m³", metrics.pm25), "-12 µg/m³".to_string()),
        ("PM10", format!("{} µg/m³", metrics.pm10), "+8 µg/m³".to_string()),
        ("Next 24h Peak", metrics.next_24h_peak.to_string(), "+15 AQI".to_string()),
    ] {
        writeln!(
            out,
            "<div class=\"metric\"><div>{}</div><h2>{}</h2><small>{}</small></div>",
            title, value, delta
        )?;
    }
    writeln!(out, "</section>")
}

/// Horizontal bar scaled against `max`
fn write_bar(out: &mut String, label: &str, value: f64, max: f64, color: &str) -> std::fmt::Result {
    let width = if max > 0.0 { (value.abs() / max * 100.0).min(100.0) } else { 0.0 };
    writeln!(
        out,
        "<tr><td>{}</td><td style=\"width:70%\"><div class=\"bar\" style=\"width:{:.1}%;background:{};\"></div></td><td>{}</td></tr>",
        label, width, color, value
    )
}

fn write_area_table(out: &mut String, areas: &[AreaSummary]) -> std::fmt::Result {
    writeln!(out, "<table><tr><th>Area</th><th>AQI</th><th>Category</th><th>Status</th></tr>")?;
    for area in areas {
        writeln!(
            out,
            "<tr><td>{}</td><td style=\"background:{};font-weight:bold;\">{}</td><td>{}</td><td>{}</td></tr>",
            area.name, area.color, area.aqi, area.category, area.label
        )?;
    }
    writeln!(out, "</table>")
}

fn write_forecast(out: &mut String, forecast: &ForecastResponse) -> std::fmt::Result {
    writeln!(out, "<table><tr><th>Hour</th><th>Time</th><th>AQI</th><th>PM2.5</th></tr>")?;
    let max = forecast.points.iter().map(|p| p.aqi).fold(0.0, f64::max);
    for point in &forecast.points {
        let width = if max > 0.0 { point.aqi / max * 100.0 } else { 0.0 };
        writeln!(
            out,
            "<tr><td>+{}h</td><td>{}</td><td><div class=\"bar\" style=\"width:{:.1}%;background:#3b82f6;\"></div>{:.0}</td><td>{:.0}</td></tr>",
            point.hour,
            point.time_label.as_deref().unwrap_or(""),
            width,
            point.aqi,
            point.pm25
        )?;
    }
    writeln!(out, "</table>")?;

    if let Some(summary) = &forecast.summary {
        writeln!(out, "<section>")?;
        if let Some(morning) = summary.tomorrow_9am_aqi {
            writeln!(
                out,
                "<div class=\"metric\"><div>Tomorrow 9 AM</div><h2>{}</h2></div>",
                morning.trunc()
            )?;
        }
        writeln!(
            out,
            "<div class=\"metric\"><div>Worst Time</div><h2>{}</h2><small>In {} hours</small></div>",
            summary.peak_aqi.trunc(),
            summary.peak_hour
        )?;
        writeln!(
            out,
            "<div class=\"metric\"><div>Best Time</div><h2>{}</h2><small>In {} hours</small></div>",
            summary.best_aqi.trunc(),
            summary.best_hour
        )?;
        writeln!(out, "</section>")?;
    }
    Ok(())
}

fn render_citizen(page: &PageContext, dashboard: &CitizenDashboard) -> Result<String, std::fmt::Error> {
    let mut body = String::new();
    writeln!(body, "<h2>Citizen Dashboard - Your Air Quality Guide</h2>")?;
    write_metrics(&mut body, &dashboard.metrics)?;

    writeln!(body, "<h2>Recommended Safe Areas (Low AQI)</h2>")?;
    match &dashboard.best_area {
        Some(best) => {
            writeln!(
                body,
                "<div class=\"safe-zone\"><h3>Best Area to Visit: {}</h3><h2>AQI: {} - {}</h2><p>This area has the lowest pollution levels in your city.</p></div>",
                best.name, best.aqi, best.label
            )?;
            for area in &dashboard.safe_zones {
                writeln!(
                    body,
                    "<div class=\"metric\"><strong>{}</strong><br>AQI: {}<br>Status: {}</div>",
                    area.name, area.aqi, area.label
                )?;
            }
        }
        None => writeln!(
            body,
            "<div class=\"alert warning\">No safe zones available currently. All areas have elevated pollution levels.</div>"
        )?,
    }

    writeln!(body, "<h3>Area-wise AQI Comparison</h3><table>")?;
    let max = dashboard.areas.iter().map(|a| f64::from(a.aqi)).fold(0.0, f64::max);
    for area in &dashboard.areas {
        write_bar(&mut body, &area.name, f64::from(area.aqi), max, &area.color)?;
    }
    writeln!(body, "</table>")?;

    writeln!(body, "<h3>Your {}-Hour AQI Forecast</h3>", dashboard.forecast.horizon_hours)?;
    write_forecast(&mut body, &dashboard.forecast)?;

    writeln!(body, "<h3>Detailed Area Information</h3>")?;
    write_area_table(&mut body, &dashboard.areas)?;

    render_shell(page, &dashboard.header, &body)
}

fn render_government(
    page: &PageContext,
    dashboard: &GovernmentDashboard,
) -> Result<String, std::fmt::Error> {
    let mut body = String::new();
    match &dashboard.panel {
        GovernmentPanel::Overview {
            metrics,
            sources,
            trend,
            hotspots,
        } => {
            writeln!(body, "<h2>Dashboard Overview</h2>")?;
            write_metrics(&mut body, metrics)?;

            writeln!(body, "<h3>Pollution Source Distribution</h3><table>")?;
            for source in sources {
                write_bar(&mut body, &source.source, f64::from(source.percentage), 100.0, &source.color)?;
            }
            writeln!(body, "</table>")?;

            writeln!(body, "<h3>6-Month AQI Trend</h3><table>")?;
            let max = trend.iter().map(|t| f64::from(t.aqi)).fold(0.0, f64::max);
            for point in trend {
                write_bar(&mut body, &point.month, f64::from(point.aqi), max, "#60a5fa")?;
            }
            writeln!(body, "</table>")?;

            writeln!(body, "<h3>Pollution Hotspots</h3>")?;
            write_area_table(&mut body, hotspots)?;
        }
        GovernmentPanel::Forecast { forecast } => {
            writeln!(body, "<h2>{}-Hour AQI Forecast</h2>", forecast.horizon_hours)?;
            write_forecast(&mut body, forecast)?;
        }
        GovernmentPanel::Sources { sources } => {
            writeln!(body, "<h2>Pollution Source Attribution</h2><table>")?;
            for source in sources {
                write_bar(&mut body, &source.source, f64::from(source.percentage), 100.0, &source.color)?;
            }
            writeln!(body, "</table><h3>Detailed Source Analysis</h3>")?;
            writeln!(body, "<table><tr><th>Source</th><th>Percentage</th><th>Emission Rate</th></tr>")?;
            for source in sources {
                writeln!(
                    body,
                    "<tr><td>{}</td><td>{}%</td><td>{}</td></tr>",
                    source.source, source.percentage, source.emission_rate
                )?;
            }
            writeln!(body, "</table>")?;
        }
        GovernmentPanel::PolicyImpact { policies } => {
            writeln!(body, "<h2>Policy Intervention Impact</h2><table>")?;
            for policy in policies {
                write_bar(
                    &mut body,
                    &policy.policy,
                    f64::from(policy.impact_percent),
                    25.0,
                    policy.impact_color(),
                )?;
            }
            writeln!(body, "</table><h3>Policy Details</h3>")?;
            writeln!(
                body,
                "<table><tr><th>Policy</th><th>Status</th><th>AQI Reduction</th><th>Cost Effectiveness</th></tr>"
            )?;
            for policy in policies {
                writeln!(
                    body,
                    "<tr><td>{}</td><td>{}</td><td>{}%</td><td>{:.2}</td></tr>",
                    policy.policy, policy.status, policy.impact_percent, policy.cost_effectiveness
                )?;
            }
            writeln!(body, "</table>")?;
        }
    }

    render_shell(page, &dashboard.header, &body)
}
