use derive_more::Display;

/// Simplified error system - the clock itself cannot fail, only its edges can.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppError {
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(String),
    #[display(fmt = "Presentation Error: {}", _0)]
    Presentation(String),
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Presentation(format!("snapshot serialization failed: {}", error))
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_edge() {
        let err = AppError::Validation("hour 25 out of range".into());
        assert_eq!(err.to_string(), "Validation Error: hour 25 out of range");
    }
}
