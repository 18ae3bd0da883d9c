//! Synthetic AQI series: the live random walk and the pseudo-forecast curve

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::ForecastPoint;
use crate::noise::NoiseSource;
use crate::validation::{validate_horizon, ValidationError};

/// Starting value of the live AQI walk
pub const LIVE_AQI_SEED: f64 = 287.0;
/// Clamp range of the live AQI walk
pub const LIVE_AQI_MIN: f64 = 150.0;
pub const LIVE_AQI_MAX: f64 = 400.0;
/// Standard deviation of one live tick
pub const LIVE_AQI_STEP_STD_DEV: f64 = 2.0;

/// Centre line of the forecast curve. Differs from [`LIVE_AQI_SEED`]; the two
/// are intentionally not unified.
pub const FORECAST_BASE_AQI: f64 = 250.0;
pub const FORECAST_AMPLITUDE: f64 = 50.0;
/// Hours per radian of the forecast sine
pub const FORECAST_PERIOD_DIVISOR: f64 = 12.0;
pub const FORECAST_NOISE_STD_DEV: f64 = 10.0;
pub const FORECAST_MIN_AQI: f64 = 50.0;
pub const FORECAST_MAX_AQI: f64 = 500.0;

/// PM2.5 (µg/m³) per AQI point
pub const PM25_PER_AQI: f64 = 0.45;
/// PM10 (µg/m³) per AQI point
pub const PM10_PER_AQI: f64 = 0.75;

/// Bounded random walk for the "current AQI" reading.
///
/// Pure Markov state: the next value depends only on the current one. The
/// caller owns the walk and keeps it between ticks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RandomWalk {
    value: f64,
    min: f64,
    max: f64,
    step_std_dev: f64,
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self {
            value: LIVE_AQI_SEED,
            min: LIVE_AQI_MIN,
            max: LIVE_AQI_MAX,
            step_std_dev: LIVE_AQI_STEP_STD_DEV,
        }
    }
}

impl RandomWalk {
    /// Walk starting at `value`, clamped into the live range
    pub fn starting_at(value: f64) -> Self {
        let mut walk = Self::default();
        if value.is_finite() {
            walk.value = value.clamp(walk.min, walk.max);
        }
        walk
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Apply one perturbation and return the new value.
    ///
    /// A non-finite sample is dropped so the walk can never leave its bounds.
    pub fn step<N: NoiseSource + ?Sized>(&mut self, noise: &mut N) -> f64 {
        let delta = noise.gaussian(self.step_std_dev);
        if delta.is_finite() {
            self.value = (self.value + delta).clamp(self.min, self.max);
        }
        self.value
    }
}

/// Expected forecast value at `hour`, before noise and clamping
pub fn forecast_baseline(hour: u32) -> f64 {
    FORECAST_BASE_AQI + FORECAST_AMPLITUDE * (f64::from(hour) / FORECAST_PERIOD_DIVISOR).sin()
}

/// Generate an hourly pseudo-forecast of `hours` points.
///
/// Point i is `clamp(250 + 50·sin(i/12) + N(0, 10), 50, 500)`. The result is
/// independent of any live walk.
pub fn forecast<N: NoiseSource + ?Sized>(
    hours: i64,
    noise: &mut N,
) -> Result<Vec<ForecastPoint>, ValidationError> {
    let horizon = validate_horizon(hours)?;

    let points = (0..horizon)
        .map(|hour| {
            let sample = noise.gaussian(FORECAST_NOISE_STD_DEV);
            let raw = forecast_baseline(hour) + if sample.is_finite() { sample } else { 0.0 };
            let aqi = raw.clamp(FORECAST_MIN_AQI, FORECAST_MAX_AQI);
            ForecastPoint {
                hour,
                aqi,
                pm25: aqi * PM25_PER_AQI,
                time_label: None,
            }
        })
        .collect();

    Ok(points)
}

/// Fill in wall-clock labels ("17 Oct 14:00") counting hours from `start`
pub fn label_forecast(points: &mut [ForecastPoint], start: NaiveDateTime) {
    for point in points {
        let at = start + Duration::hours(i64::from(point.hour));
        point.time_label = Some(at.format("%d %b %H:%M").to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{GaussianNoise, ZeroNoise};
    use proptest::prelude::*;

    /// Replays a fixed list of samples, cycling
    struct ScriptedNoise(Vec<f64>, usize);

    impl NoiseSource for ScriptedNoise {
        fn gaussian(&mut self, _std_dev: f64) -> f64 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    #[test]
    fn test_walk_defaults() {
        let walk = RandomWalk::default();
        assert_eq!(walk.value(), 287.0);
        assert_eq!(walk.bounds(), (150.0, 400.0));
    }

    #[test]
    fn test_walk_applies_delta() {
        let mut walk = RandomWalk::default();
        let mut noise = ScriptedNoise(vec![3.0, -1.5], 0);
        assert_eq!(walk.step(&mut noise), 290.0);
        assert_eq!(walk.step(&mut noise), 288.5);
    }

    #[test]
    fn test_walk_clamps_both_ends() {
        let mut walk = RandomWalk::default();
        let mut up = ScriptedNoise(vec![1e9], 0);
        assert_eq!(walk.step(&mut up), 400.0);
        let mut down = ScriptedNoise(vec![-1e9], 0);
        assert_eq!(walk.step(&mut down), 150.0);
    }

    #[test]
    fn test_walk_ignores_non_finite_noise() {
        let mut walk = RandomWalk::default();
        let mut noise = ScriptedNoise(vec![f64::NAN, f64::INFINITY], 0);
        assert_eq!(walk.step(&mut noise), 287.0);
        assert_eq!(walk.step(&mut noise), 287.0);
    }

    #[test]
    fn test_walk_zero_noise_is_fixed_point() {
        let mut walk = RandomWalk::default();
        for _ in 0..100 {
            walk.step(&mut ZeroNoise);
        }
        assert_eq!(walk.value(), LIVE_AQI_SEED);
    }

    #[test]
    fn test_starting_at_clamps() {
        assert_eq!(RandomWalk::starting_at(10.0).value(), 150.0);
        assert_eq!(RandomWalk::starting_at(999.0).value(), 400.0);
        assert_eq!(RandomWalk::starting_at(f64::NAN).value(), LIVE_AQI_SEED);
    }

    #[test]
    fn test_forecast_lengths() {
        let mut noise = GaussianNoise::seeded(3);
        assert_eq!(forecast(24, &mut noise).unwrap().len(), 24);
        assert_eq!(forecast(72, &mut noise).unwrap().len(), 72);
    }

    #[test]
    fn test_forecast_point_zero_expected_value() {
        assert_eq!(forecast_baseline(0), 250.0);
        let points = forecast(24, &mut ZeroNoise).unwrap();
        assert_eq!(points[0].aqi, 250.0);
        assert_eq!(points[0].hour, 0);
    }

    #[test]
    fn test_forecast_zero_noise_is_exact() {
        let points = forecast(72, &mut ZeroNoise).unwrap();
        for (i, point) in points.iter().enumerate() {
            let expected = (250.0 + 50.0 * (i as f64 / 12.0).sin()).clamp(50.0, 500.0);
            assert_eq!(point.aqi, expected);
            assert_eq!(point.hour, i as u32);
            assert_eq!(point.pm25, expected * 0.45);
        }
    }

    #[test]
    fn test_forecast_clamps_extreme_noise() {
        let mut high = ScriptedNoise(vec![1e6], 0);
        assert!(forecast(24, &mut high).unwrap().iter().all(|p| p.aqi == 500.0));
        let mut low = ScriptedNoise(vec![-1e6], 0);
        assert!(forecast(24, &mut low).unwrap().iter().all(|p| p.aqi == 50.0));
    }

    #[test]
    fn test_forecast_rejects_bad_horizon() {
        assert!(matches!(
            forecast(0, &mut ZeroNoise),
            Err(ValidationError::InvalidHorizon { got: 0, .. })
        ));
        assert!(forecast(-24, &mut ZeroNoise).is_err());
        assert!(forecast(10_000, &mut ZeroNoise).is_err());
    }

    #[test]
    fn test_label_forecast() {
        let start = chrono::NaiveDate::from_ymd_opt(2025, 10, 17)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap();
        let mut points = forecast(4, &mut ZeroNoise).unwrap();
        label_forecast(&mut points, start);
        assert_eq!(points[0].time_label.as_deref(), Some("17 Oct 22:00"));
        assert_eq!(points[3].time_label.as_deref(), Some("18 Oct 01:00"));
    }

    #[test]
    fn test_forecast_is_reproducible_with_seed() {
        let a = forecast(72, &mut GaussianNoise::seeded(99)).unwrap();
        let b = forecast(72, &mut GaussianNoise::seeded(99)).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_walk_stays_in_bounds(
            start in 150.0f64..=400.0,
            deltas in proptest::collection::vec(-1e4f64..1e4, 1..200),
        ) {
            let mut walk = RandomWalk::starting_at(start);
            let mut noise = ScriptedNoise(deltas.clone(), 0);
            for _ in 0..deltas.len() {
                let v = walk.step(&mut noise);
                prop_assert!((LIVE_AQI_MIN..=LIVE_AQI_MAX).contains(&v));
            }
        }

        #[test]
        fn prop_forecast_in_range(seed in any::<u64>(), hours in 1i64..=168) {
            let points = forecast(hours, &mut GaussianNoise::seeded(seed)).unwrap();
            prop_assert_eq!(points.len() as i64, hours);
            for p in &points {
                prop_assert!((FORECAST_MIN_AQI..=FORECAST_MAX_AQI).contains(&p.aqi));
            }
        }
    }
}
