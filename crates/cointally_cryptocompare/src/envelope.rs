use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};

/// Status fields CryptoCompare puts next to `Data` in every response.
///
/// Errors such as exhausted rate limits come back with HTTP 200 and
/// `Response: "Error"`, so callers have to look at this as well as the status.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct ApiStatus {
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
    #[serde(rename = "HasWarning")]
    pub has_warning: bool,
    #[serde(rename = "Type")]
    pub kind: Option<i64>,
    #[serde(rename = "RateLimit")]
    pub rate_limit: Option<RateLimit>,
}

impl ApiStatus {
    pub fn is_error(&self) -> bool {
        self.response.as_deref() == Some("Error")
    }

    /// The API message when the envelope reports an error.
    pub fn error_message(&self) -> Option<&str> {
        if self.is_error() {
            Some(self.message.as_deref().unwrap_or("unknown error"))
        } else {
            None
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RateLimit {
    #[serde(rename = "calls_made", default)]
    pub calls_made: Option<CallsInfo>,
    #[serde(rename = "calls_left", default)]
    pub calls_left: Option<CallsInfo>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CallsInfo {
    #[serde(default)]
    pub second: Option<i64>,
    #[serde(default)]
    pub minute: Option<i64>,
    #[serde(default)]
    pub hour: Option<i64>,
    #[serde(default)]
    pub day: Option<i64>,
    #[serde(default)]
    pub month: Option<i64>,
}

/// Deserializes a JSON array into `Vec<T>`, treating any non-array value
/// (the API sends `{}` alongside errors) as empty. Malformed elements are
/// still an error.
pub(crate) fn array_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match serde_json::Value::deserialize(deserializer)? {
        value @ serde_json::Value::Array(_) => {
            serde_json::from_value(value).map_err(D::Error::custom)
        }
        _ => Ok(Vec::new()),
    }
}
