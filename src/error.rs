use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no element matches `{0}`")]
    MissingElement(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SetupError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(describe_js_value(&value))
    }
}

#[cfg(target_arch = "wasm32")]
pub fn describe_js_value(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }

    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_selector() {
        let error = SetupError::MissingElement(".mobile-toggle");

        assert_eq!(error.to_string(), "no element matches `.mobile-toggle`");
    }

    #[test]
    fn js_failure_keeps_browser_message() {
        let error = SetupError::Js("SyntaxError: bad selector".to_string());

        assert_eq!(error.to_string(), "browser call failed: SyntaxError: bad selector");
    }
}
