use log::debug;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, RequestBuilder, StatusCode};
use serde::Serialize;

pub const BASE_URL: &str = "https://api.coingecko.com";

/// Response body as received, whatever its status.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Serialize, Debug)]
pub struct MarketChartParams<'a> {
    pub vs_currency: &'a str,
    pub days: u32,
}

pub struct CoinGeckoClient {
    reqwest: Client,
    base_url: String,
}

impl CoinGeckoClient {
    /// `api_key` is a demo-plan key, sent as `x-cg-demo-api-key`.
    pub fn with_base_url(base_url: &str, api_key: Option<&str>) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(api_key) = api_key {
            default_headers.insert(
                "x-cg-demo-api-key",
                HeaderValue::from_str(api_key).expect("Failed to create header value"),
            );
        }

        let reqwest = ClientBuilder::new()
            .default_headers(default_headers)
            .build()
            .expect("Failed to build reqwest client");

        Self {
            reqwest,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");
        url
    }

    async fn send_raw(request: RequestBuilder) -> reqwest::Result<RawResponse> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }

    pub async fn ping(&self) -> reqwest::Result<RawResponse> {
        Self::send_raw(self.reqwest.get(self.url("/api/v3/ping"))).await
    }

    pub async fn market_chart(
        &self,
        coin_id: &str,
        params: &MarketChartParams<'_>,
    ) -> reqwest::Result<RawResponse> {
        let url = self.url(&format!("/api/v3/coins/{coin_id}/market_chart"));
        Self::send_raw(self.reqwest.get(url).query(params)).await
    }
}
