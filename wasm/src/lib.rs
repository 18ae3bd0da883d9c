//! WebAssembly module for the AirSense dashboard
//!
//! Provides client-side computation for:
//! - AQI classification, colors and health advisories
//! - The synthetic forecast
//! - A live AQI walk the page can tick without a server round trip

use serde::Serialize;
use shared::{classify, forecast, ForecastPoint, ForecastSummary, GaussianNoise, RandomWalk, Severity};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str("AirSense WASM module loaded"));
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Classify an AQI value, returning the classification as JSON
#[wasm_bindgen]
pub fn classify_aqi(aqi: f64) -> Result<String, JsValue> {
    let classification = classify(aqi).map_err(to_js_error)?;
    serde_json::to_string(&classification).map_err(to_js_error)
}

/// Band color for an AQI value
#[wasm_bindgen]
pub fn get_aqi_color(aqi: f64) -> Result<String, JsValue> {
    shared::aqi_color(aqi).map(str::to_string).map_err(to_js_error)
}

/// Band label for an AQI value
#[wasm_bindgen]
pub fn get_aqi_level(aqi: f64) -> Result<String, JsValue> {
    shared::aqi_level(aqi).map(str::to_string).map_err(to_js_error)
}

/// Health advisory for an AQI value
#[wasm_bindgen]
pub fn get_health_advisory(aqi: f64) -> Result<String, JsValue> {
    shared::validate_aqi(aqi).map_err(to_js_error)?;
    Ok(Severity::from_aqi(aqi).health_advisory().to_string())
}

#[derive(Serialize)]
struct ForecastPayload {
    points: Vec<ForecastPoint>,
    summary: Option<ForecastSummary>,
}

/// Generate an hourly forecast, returned as JSON `{points, summary}`
#[wasm_bindgen]
pub fn generate_forecast(hours: i32) -> Result<String, JsValue> {
    let mut noise = GaussianNoise::from_entropy();
    let points = forecast(i64::from(hours), &mut noise).map_err(to_js_error)?;
    let summary = ForecastSummary::from_points(&points);
    serde_json::to_string(&ForecastPayload { points, summary }).map_err(to_js_error)
}

/// Live AQI reading owned by the page
#[wasm_bindgen]
pub struct LiveAqi {
    walk: RandomWalk,
    noise: GaussianNoise,
}

#[wasm_bindgen]
impl LiveAqi {
    #[wasm_bindgen(constructor)]
    pub fn new() -> LiveAqi {
        LiveAqi {
            walk: RandomWalk::default(),
            noise: GaussianNoise::from_entropy(),
        }
    }

    /// Advance one step and return the new value
    pub fn tick(&mut self) -> f64 {
        self.walk.step(&mut self.noise)
    }

    pub fn value(&self) -> f64 {
        self.walk.value()
    }
}

impl Default for LiveAqi {
    fn default() -> Self {
        Self::new()
    }
}
