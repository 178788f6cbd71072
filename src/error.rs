use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Error value produced by the host's command dispatch.
///
/// The host is free to reject with any JSON value (usually a string), so the
/// client keeps it verbatim and never classifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvokeError(pub JsonValue);

impl InvokeError {
    pub fn new(value: impl Into<JsonValue>) -> Self {
        Self(value.into())
    }

    /// A plain string rejection, the shape the host's `Result<_, String>` commands produce.
    pub fn message(msg: impl Into<String>) -> Self {
        Self(JsonValue::String(msg.into()))
    }

    /// The transport had nobody to deliver `cmd` to.
    pub fn unreachable(cmd: &str) -> Self {
        Self::message(format!("host unreachable: `{cmd}` could not be delivered"))
    }

    /// The host accepted `cmd` but dropped it without replying.
    pub fn dropped(cmd: &str) -> Self {
        Self::message(format!("host dropped `{cmd}` without a reply"))
    }

    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_value(self) -> JsonValue {
        self.0
    }
}

impl std::fmt::Display for InvokeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            JsonValue::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

impl std::error::Error for InvokeError {}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote call failed. Carries the host's error untouched.
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    #[error("failed to encode command arguments: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("unexpected reply from host: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl Error {
    /// The host's error, when the failure came from the remote call.
    pub fn as_invoke(&self) -> Option<&InvokeError> {
        match self {
            Error::Invoke(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_errors_display_verbatim() {
        let err = InvokeError::message("a window state with label `main` doesn't exist");
        assert_eq!(err.to_string(), "a window state with label `main` doesn't exist");
    }

    #[test]
    fn structured_errors_display_as_json() {
        let err = InvokeError::new(json!({ "code": 4, "reason": "no window" }));
        assert_eq!(err.to_string(), r#"{"code":4,"reason":"no window"}"#);
    }

    #[test]
    fn invoke_variant_is_transparent() {
        let inner = InvokeError::message("boom");
        let err = Error::from(inner.clone());
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.as_invoke(), Some(&inner));
    }

    #[test]
    fn decode_failures_are_not_invoke_errors() {
        let source = serde_json::from_value::<String>(json!(7)).unwrap_err();
        let err = Error::Deserialize(source);
        assert!(err.as_invoke().is_none());
        assert!(err.to_string().starts_with("unexpected reply from host"));
    }
}
