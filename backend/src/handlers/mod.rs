//! HTTP handlers for the AirSense dashboard

mod aqi;
mod dashboard;
mod forecast;
mod health;
mod page;
mod reference;

pub use aqi::*;
pub use dashboard::*;
pub use forecast::*;
pub use health::*;
pub use page::*;
pub use reference::*;
