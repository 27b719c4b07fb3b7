use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the market-cap top list.
///
/// `max_supply` is the value the API sent, unchanged, or `0` when it sent none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSummary {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "MaxSupply")]
    pub max_supply: Value,
}

/// One day of OHLCV data for a single asset.
///
/// Values are carried as the API sent them. Missing values are `None`, which
/// serializes to an empty CSV cell and to JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    #[serde(rename = "Coin")]
    pub coin: String,
    #[serde(rename = "Time")]
    pub time: Option<Value>,
    #[serde(rename = "High")]
    pub high: Option<Value>,
    #[serde(rename = "Low")]
    pub low: Option<Value>,
    #[serde(rename = "Open")]
    pub open: Option<Value>,
    #[serde(rename = "Close")]
    pub close: Option<Value>,
    #[serde(rename = "VolumeFrom")]
    pub volume_from: Option<Value>,
    #[serde(rename = "VolumeTo")]
    pub volume_to: Option<Value>,
}

impl AssetSummary {
    pub const COLUMNS: [&'static str; 2] = ["Name", "MaxSupply"];

    pub fn default_max_supply() -> Value {
        Value::from(0)
    }
}

impl DailyBar {
    pub const COLUMNS: [&'static str; 8] = [
        "Coin",
        "Time",
        "High",
        "Low",
        "Open",
        "Close",
        "VolumeFrom",
        "VolumeTo",
    ];
}

/// Arrays and objects cannot sit in a CSV cell, so they are kept as their
/// JSON text. Scalars pass through untouched.
pub fn cell_value(value: Value) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) => Value::String(value.to_string()),
        scalar => scalar,
    }
}
