use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt::{self, Debug};

/// Result of exchanging an authorization nonce.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"***")
            .finish()
    }
}

/// A drop-off location where shipments enter the BoxC network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPoint {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Quote returned by the estimate endpoint.
///
/// Amounts and transit times are kept as the JSON the API sent, since they
/// arrive as strings or numbers depending on the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oversize_fee: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<EstimateService>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Estimate {
    pub fn services(&self) -> &[EstimateService] {
        self.services.as_deref().unwrap_or_default()
    }
}

/// One shipping service quoted by an estimate. Transit times are in days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateService {
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_min: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_max: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Ids arrive as either `"12"` or `12` depending on the endpoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}
