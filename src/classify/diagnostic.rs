use serde::Serialize;
use serde_json::Value;

/// Best-effort payload extracted from a response or rejection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Diagnostic {
    Json(Value),
    Text(String),
    Null,
}

impl Diagnostic {
    /// JSON first, then UTF-8 text, then null. Never fails.
    #[must_use]
    pub fn from_body(body: Result<&[u8], &str>) -> Self {
        let Ok(bytes) = body else {
            return Self::Null;
        };
        if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
            return Self::Json(value);
        }
        std::str::from_utf8(bytes).map_or(Self::Null, |text| Self::Text(text.to_owned()))
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{}", value),
            Self::Text(text) => f.write_str(text),
            Self::Null => f.write_str("null"),
        }
    }
}
