use serde::Serialize;

/// A CryptoCompare REST endpoint: its path relative to the API host, the
/// query parameters it takes and the body it answers with.
pub trait Method {
    const PATH: &'static str;

    type Response: serde::de::DeserializeOwned;
    type Params: Serialize;
}
