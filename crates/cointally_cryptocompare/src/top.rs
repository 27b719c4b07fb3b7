use crate::envelope::{ApiStatus, array_or_empty};
use crate::method::Method;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query for the top assets by market capitalization.
#[derive(Serialize, Deserialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct TopMktCapParams {
    #[serde(rename = "tsym")]
    pub target_sym: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TopMktCapResponse {
    #[serde(flatten)]
    pub status: ApiStatus,
    #[serde(rename = "Data", default, deserialize_with = "array_or_empty")]
    pub data: Vec<TopMktCapEntry>,
}

/// Only `CoinInfo` is modelled; the `RAW` and `DISPLAY` price blocks are skipped.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct TopMktCapEntry {
    #[serde(rename = "CoinInfo")]
    pub coin_info: CoinInfo,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct CoinInfo {
    #[serde(rename = "Id")]
    pub id: Option<Value>,
    #[serde(rename = "Name")]
    pub name: Option<Value>,
    #[serde(rename = "FullName")]
    pub full_name: Option<Value>,
    #[serde(rename = "MaxSupply")]
    pub max_supply: Option<Value>,
}

pub struct TopMktCapFull;

impl Method for TopMktCapFull {
    const PATH: &'static str = "/data/top/mktcapfull";

    type Response = TopMktCapResponse;
    type Params = TopMktCapParams;
}
