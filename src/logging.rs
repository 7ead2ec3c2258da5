use std::cmp::Ordering;

use crate::config::MotionConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Error => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

pub fn log_event(config: &MotionConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let line = event_payload(now_unix_seconds(), level, event, fields).to_string();
    emit(level, &line);
}

fn event_payload(
    ts: u64,
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts)),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Error => web_sys::console::error_1(&value),
        LogLevel::Debug => web_sys::console::debug_1(&value),
        LogLevel::Info => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LogLevel, line: &str) {
    match level {
        LogLevel::Error => eprintln!("{line}"),
        LogLevel::Debug | LogLevel::Info => println!("{line}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_order_from_debug_to_error() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Error);
        assert_eq!(LogLevel::Error.max(LogLevel::Debug), LogLevel::Error);
    }

    #[test]
    fn payload_carries_envelope_and_fields() {
        let payload = event_payload(
            1_700_000_000,
            LogLevel::Info,
            "feature_installed",
            json!({ "feature": "navbar", "targets": 1 }),
        );

        assert_eq!(payload["ts"], json!(1_700_000_000u64));
        assert_eq!(payload["level"], json!("info"));
        assert_eq!(payload["event"], json!("feature_installed"));
        assert_eq!(payload["feature"], json!("navbar"));
        assert_eq!(payload["targets"], json!(1));
    }

    #[test]
    fn non_object_fields_are_dropped() {
        let payload = event_payload(0, LogLevel::Error, "uncaught_error", json!("ignored"));
        let object = payload.as_object().expect("payload is an object");

        assert_eq!(object.len(), 3);
    }

    #[test]
    fn fields_are_merged_after_envelope() {
        let payload = event_payload(5, LogLevel::Debug, "startup", json!({ "level": "custom" }));

        assert_eq!(payload["level"], json!("custom"));
    }
}
