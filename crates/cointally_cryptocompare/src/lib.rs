pub mod envelope;
pub mod error;
pub mod histoday;
pub mod method;
pub mod top;

pub use error::ClientError;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const BASE_URL: &str = "https://min-api.cryptocompare.com";

pub struct CryptocompareClient {
    reqwest: Client,
    base_url: String,
}

impl CryptocompareClient {
    /// The key is optional: the endpoints used here answer anonymous requests,
    /// just with a lower rate limit.
    pub fn with_base_url(base_url: &str, api_key: Option<&str>) -> Self {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = api_key {
            headers.insert(
                "Authorization",
                HeaderValue::from_str(format!("Apikey {api_key}").as_str())
                    .expect("Failed to create header value"),
            );
        }

        let reqwest = ClientBuilder::new()
            .default_headers(headers)
            .build()
            .expect("Failed to build reqwest client");

        Self {
            reqwest,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) async fn get<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self.reqwest.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let body = response.text().await?;

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn call<M: method::Method>(
        &self,
        params: M::Params,
    ) -> Result<M::Response, ClientError> {
        self.get(M::PATH, &params).await
    }
}
