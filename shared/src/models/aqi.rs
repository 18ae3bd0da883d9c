//! AQI severity bands and classification

use serde::{Deserialize, Serialize};

use crate::validation::{validate_aqi, ValidationError};

/// Severity category for an AQI reading, ordered from best to worst
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// AQI <= 50
    Good,
    /// 50 < AQI <= 100
    Satisfactory,
    /// 100 < AQI <= 200
    Moderate,
    /// 200 < AQI <= 300
    Poor,
    /// 300 < AQI <= 400
    VeryPoor,
    /// AQI > 400
    Severe,
}

/// One row of the band table
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Band {
    pub severity: Severity,
    /// Inclusive upper bound; `None` for the open-ended last band
    pub upper: Option<f64>,
    pub label: &'static str,
    pub color: &'static str,
    pub health_advisory: &'static str,
}

/// The single ordered band table. Lookups walk it in ascending order and the
/// first band whose upper bound is >= the reading wins.
pub static AQI_BANDS: [Band; 6] = [
    Band {
        severity: Severity::Good,
        upper: Some(50.0),
        label: "Good",
        color: "#10b981",
        health_advisory: "Air quality is good. Enjoy outdoor activities!",
    },
    Band {
        severity: Severity::Satisfactory,
        upper: Some(100.0),
        label: "Satisfactory",
        color: "#84cc16",
        health_advisory: "Air quality is acceptable for most people.",
    },
    Band {
        severity: Severity::Moderate,
        upper: Some(200.0),
        label: "Moderate",
        color: "#f59e0b",
        health_advisory: "Sensitive groups should limit outdoor exposure.",
    },
    Band {
        severity: Severity::Poor,
        upper: Some(300.0),
        label: "Poor",
        color: "#ef4444",
        health_advisory: "Everyone should limit outdoor activities.",
    },
    Band {
        severity: Severity::VeryPoor,
        upper: Some(400.0),
        label: "Very Poor",
        color: "#b91c1c",
        health_advisory: "Avoid outdoor activities. Use N95 masks.",
    },
    Band {
        severity: Severity::Severe,
        upper: None,
        label: "Severe",
        color: "#7f1d1d",
        health_advisory: "EMERGENCY: Stay indoors. Health alert for all!",
    },
];

impl Severity {
    /// Map a finite AQI value to its band. Callers holding unchecked input
    /// should go through [`classify`] instead.
    pub fn from_aqi(aqi: f64) -> Severity {
        band_for(aqi).severity
    }

    pub fn band(&self) -> &'static Band {
        // Table order matches declaration order
        &AQI_BANDS[*self as usize]
    }

    pub fn label(&self) -> &'static str {
        self.band().label
    }

    pub fn color(&self) -> &'static str {
        self.band().color
    }

    pub fn health_advisory(&self) -> &'static str {
        self.band().health_advisory
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn band_for(aqi: f64) -> &'static Band {
    AQI_BANDS
        .iter()
        .find(|band| band.upper.map_or(true, |upper| aqi <= upper))
        .unwrap_or(&AQI_BANDS[AQI_BANDS.len() - 1])
}

/// Result of classifying one AQI reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Classification {
    pub aqi: f64,
    pub severity: Severity,
    pub label: String,
    pub color: String,
}

/// Classify an AQI reading into its severity band.
///
/// Any finite value maps to exactly one band; values below zero land in
/// `Good` and values above 400 in `Severe`. NaN and infinities are rejected.
pub fn classify(aqi: f64) -> Result<Classification, ValidationError> {
    validate_aqi(aqi)?;
    let band = band_for(aqi);
    Ok(Classification {
        aqi,
        severity: band.severity,
        label: band.label.to_string(),
        color: band.color.to_string(),
    })
}

/// Display color for an AQI reading
pub fn aqi_color(aqi: f64) -> Result<&'static str, ValidationError> {
    validate_aqi(aqi)?;
    Ok(band_for(aqi).color)
}

/// Severity label for an AQI reading
pub fn aqi_level(aqi: f64) -> Result<&'static str, ValidationError> {
    validate_aqi(aqi)?;
    Ok(band_for(aqi).label)
}
