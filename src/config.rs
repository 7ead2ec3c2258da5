use serde::Deserialize;

use crate::logging::LogLevel;

pub const CONFIG_ELEMENT_ID: &str = "motion-config";

const DEFAULT_NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
const DEFAULT_BACK_TO_TOP_THRESHOLD: f64 = 300.0;
const DEFAULT_PARALLAX_RATE: f64 = 0.3;
const DEFAULT_ANCHOR_OFFSET: f64 = 80.0;
const DEFAULT_STAGGER_STEP_MS: u32 = 150;
const DEFAULT_RIPPLE_LIFETIME_MS: u32 = 600;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_TYPING_DELAY_MS: u32 = 1_000;
const DEFAULT_TYPING_SPEED_MS: u32 = 80;
const DEFAULT_ANNOUNCEMENT_LIFETIME_MS: u32 = 1_000;
const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 150;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const NAVBAR_SCROLL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const BACK_TO_TOP_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 100_000.0);
const PARALLAX_RATE_BOUNDS: (f64, f64) = (0.0, 1.0);
const ANCHOR_OFFSET_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const STAGGER_STEP_MS_BOUNDS: (u32, u32) = (0, 2_000);
const RIPPLE_LIFETIME_MS_BOUNDS: (u32, u32) = (50, 10_000);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const TYPING_DELAY_MS_BOUNDS: (u32, u32) = (0, 30_000);
const TYPING_SPEED_MS_BOUNDS: (u32, u32) = (1, 1_000);
const ANNOUNCEMENT_LIFETIME_MS_BOUNDS: (u32, u32) = (100, 30_000);
const RESIZE_DEBOUNCE_MS_BOUNDS: (u32, u32) = (0, 5_000);

#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub navbar_scroll_threshold: f64,
    pub back_to_top_threshold: f64,
    pub parallax_rate: f64,
    pub anchor_offset: f64,
    pub stagger_step_ms: u32,
    pub ripple_lifetime_ms: u32,
    pub reveal_threshold: f64,
    pub typing_delay_ms: u32,
    pub typing_speed_ms: u32,
    pub announcement_lifetime_ms: u32,
    pub resize_debounce_ms: u32,
    pub log_level: LogLevel,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionOverrides {
    navbar_scroll_threshold: Option<f64>,
    back_to_top_threshold: Option<f64>,
    parallax_rate: Option<f64>,
    anchor_offset: Option<f64>,
    stagger_step_ms: Option<u32>,
    ripple_lifetime_ms: Option<u32>,
    reveal_threshold: Option<f64>,
    typing_delay_ms: Option<u32>,
    typing_speed_ms: Option<u32>,
    announcement_lifetime_ms: Option<u32>,
    resize_debounce_ms: Option<u32>,
    log_level: Option<String>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::from_overrides(MotionOverrides::default())
    }
}

impl MotionConfig {
    pub fn from_overrides(overrides: MotionOverrides) -> Self {
        Self {
            navbar_scroll_threshold: bounded_f64(
                overrides.navbar_scroll_threshold,
                DEFAULT_NAVBAR_SCROLL_THRESHOLD,
                NAVBAR_SCROLL_THRESHOLD_BOUNDS,
            ),
            back_to_top_threshold: bounded_f64(
                overrides.back_to_top_threshold,
                DEFAULT_BACK_TO_TOP_THRESHOLD,
                BACK_TO_TOP_THRESHOLD_BOUNDS,
            ),
            parallax_rate: bounded_f64(
                overrides.parallax_rate,
                DEFAULT_PARALLAX_RATE,
                PARALLAX_RATE_BOUNDS,
            ),
            anchor_offset: bounded_f64(
                overrides.anchor_offset,
                DEFAULT_ANCHOR_OFFSET,
                ANCHOR_OFFSET_BOUNDS,
            ),
            stagger_step_ms: bounded_u32(
                overrides.stagger_step_ms,
                DEFAULT_STAGGER_STEP_MS,
                STAGGER_STEP_MS_BOUNDS,
            ),
            ripple_lifetime_ms: bounded_u32(
                overrides.ripple_lifetime_ms,
                DEFAULT_RIPPLE_LIFETIME_MS,
                RIPPLE_LIFETIME_MS_BOUNDS,
            ),
            reveal_threshold: bounded_f64(
                overrides.reveal_threshold,
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            typing_delay_ms: bounded_u32(
                overrides.typing_delay_ms,
                DEFAULT_TYPING_DELAY_MS,
                TYPING_DELAY_MS_BOUNDS,
            ),
            typing_speed_ms: bounded_u32(
                overrides.typing_speed_ms,
                DEFAULT_TYPING_SPEED_MS,
                TYPING_SPEED_MS_BOUNDS,
            ),
            announcement_lifetime_ms: bounded_u32(
                overrides.announcement_lifetime_ms,
                DEFAULT_ANNOUNCEMENT_LIFETIME_MS,
                ANNOUNCEMENT_LIFETIME_MS_BOUNDS,
            ),
            resize_debounce_ms: bounded_u32(
                overrides.resize_debounce_ms,
                DEFAULT_RESIZE_DEBOUNCE_MS,
                RESIZE_DEBOUNCE_MS_BOUNDS,
            ),
            log_level: parse_log_level(overrides.log_level.as_deref(), DEFAULT_LOG_LEVEL),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let overrides = serde_json::from_str::<MotionOverrides>(raw)?;
        Ok(Self::from_overrides(overrides))
    }
}

fn bounded_f64(value: Option<f64>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .filter(|value| value.is_finite())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn bounded_u32(value: Option<u32>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(value: Option<&str>, default: LogLevel) -> LogLevel {
    match value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("debug") => LogLevel::Debug,
        Some("info") => LogLevel::Info,
        Some("error") => LogLevel::Error,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let config = MotionConfig::default();

        assert_eq!(config.navbar_scroll_threshold, 50.0);
        assert_eq!(config.back_to_top_threshold, 300.0);
        assert_eq!(config.parallax_rate, 0.3);
        assert_eq!(config.anchor_offset, 80.0);
        assert_eq!(config.stagger_step_ms, 150);
        assert_eq!(config.ripple_lifetime_ms, 600);
        assert_eq!(config.typing_delay_ms, 1_000);
        assert_eq!(config.typing_speed_ms, 80);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn json_overrides_apply_within_bounds() {
        let config = MotionConfig::from_json(
            r#"{"navbarScrollThreshold": 120, "staggerStepMs": 90, "logLevel": "DEBUG"}"#,
        )
        .expect("valid config JSON");

        assert_eq!(config.navbar_scroll_threshold, 120.0);
        assert_eq!(config.stagger_step_ms, 90);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.back_to_top_threshold, 300.0);
    }

    #[test]
    fn out_of_bounds_values_fall_back_to_defaults() {
        let config = MotionConfig::from_json(
            r#"{"parallaxRate": 4.5, "typingSpeedMs": 0, "rippleLifetimeMs": 20, "logLevel": "loud"}"#,
        )
        .expect("valid config JSON");

        assert_eq!(config.parallax_rate, 0.3);
        assert_eq!(config.typing_speed_ms, 80);
        assert_eq!(config.ripple_lifetime_ms, 600);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = MotionConfig::from_json(r#"{"theme": "dark"}"#).expect("valid config JSON");

        assert_eq!(config, MotionConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(MotionConfig::from_json("{navbar: 1").is_err());
        assert!(MotionConfig::from_json(r#"{"staggerStepMs": -5}"#).is_err());
    }
}
