use crate::envelope::ApiStatus;
use crate::method::Method;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct HistodayParams {
    #[serde(rename = "fsym")]
    pub source_sym: String,

    #[serde(rename = "tsym")]
    pub target_sym: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CryptoCompareHistodayResponse {
    #[serde(flatten)]
    pub status: ApiStatus,
    #[serde(rename = "Data", default)]
    pub data: Option<CryptoCompareHistodayData>,
}

impl CryptoCompareHistodayResponse {
    /// The daily entries, empty when the response carried none.
    pub fn into_entries(self) -> Vec<CryptoCompareHistodayEntry> {
        self.data.map(|data| data.data).unwrap_or_default()
    }
}

/// On error the API sends `"Data": {}`, so every field here is optional.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct CryptoCompareHistodayData {
    #[serde(rename = "Aggregated")]
    pub aggregated: bool,
    #[serde(rename = "TimeFrom")]
    pub time_from: Option<Value>,
    #[serde(rename = "TimeTo")]
    pub time_to: Option<Value>,
    #[serde(rename = "Data", deserialize_with = "crate::envelope::array_or_empty")]
    pub data: Vec<CryptoCompareHistodayEntry>,
}

/// Values are kept as sent; the API is not consistent about their types.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct CryptoCompareHistodayEntry {
    pub time: Option<Value>,
    pub high: Option<Value>,
    pub low: Option<Value>,
    pub open: Option<Value>,
    pub volumefrom: Option<Value>,
    pub volumeto: Option<Value>,
    pub close: Option<Value>,
    #[serde(rename = "conversionType")]
    pub conversion_type: Option<Value>,
    #[serde(rename = "conversionSymbol")]
    pub conversion_symbol: Option<Value>,
}

pub struct Histoday;

impl Method for Histoday {
    const PATH: &'static str = "/data/v2/histoday";

    type Response = CryptoCompareHistodayResponse;
    type Params = HistodayParams;
}
