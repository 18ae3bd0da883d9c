//! Business logic services for the AirSense dashboard

pub mod dashboard;
pub mod forecast;
pub mod session;

pub use dashboard::DashboardService;
pub use forecast::ForecastService;
pub use session::SessionStore;
