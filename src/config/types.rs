use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::args::OutputFormat;
use crate::args::parsers::parse_timeout;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub total: Option<usize>,
    pub seed: Option<u64>,
    pub ceiling: Option<usize>,
    /// Same syntax as `--timeout`, e.g. `"500ms"` or `"5s"`.
    #[serde(default, deserialize_with = "timeout_from_text")]
    pub timeout: Option<Duration>,
    pub output_format: Option<OutputFormat>,
    pub endpoints: Option<BTreeMap<String, EndpointConfig>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EndpointConfig {
    /// Treat HTTP 409 responses from this endpoint as success.
    pub conflict_is_success: Option<bool>,
}

fn timeout_from_text<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|text| parse_timeout(&text).map_err(serde::de::Error::custom))
        .transpose()
}
