use cointally_cryptocompare::histoday::{Histoday, HistodayParams};
use cointally_cryptocompare::top::{TopMktCapFull, TopMktCapParams};
use cointally_cryptocompare::{ClientError, CryptocompareClient};
use cointally_models::{cell_value, AssetSummary, DailyBar};
use log::{debug, warn};
use serde_json::Value;

/// Ticker text for whatever the API put in `Name`.
fn ticker(name: Option<Value>) -> String {
    match name {
        Some(Value::String(name)) => name,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Top `limit` coins by market cap, in rank order.
///
/// A non-success status is logged and yields an empty list. Transport and
/// decoding failures are returned.
pub async fn fetch_top_coins(
    client: &CryptocompareClient,
    limit: u32,
    quote: &str,
) -> Result<Vec<AssetSummary>, ClientError> {
    let params = TopMktCapParams::builder()
        .target_sym(quote)
        .limit(limit)
        .build();
    debug!("Fetching top coins with {params:?}");

    let response = match client.call::<TopMktCapFull>(params).await {
        Ok(response) => response,
        Err(ClientError::Status(status)) => {
            warn!("Error fetching top coins: {status}");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err),
    };

    if let Some(message) = response.status.error_message() {
        warn!("CryptoCompare rejected the top coins request: {message}");
    }

    let top_coins = response
        .data
        .into_iter()
        .map(|entry| AssetSummary {
            name: ticker(entry.coin_info.name),
            max_supply: entry
                .coin_info
                .max_supply
                .map(cell_value)
                .unwrap_or_else(AssetSummary::default_max_supply),
        })
        .collect();

    Ok(top_coins)
}

/// Up to `days` daily bars for `symbol`, oldest first, each tagged with `symbol`.
pub async fn fetch_historical_data(
    client: &CryptocompareClient,
    symbol: &str,
    days: u32,
    quote: &str,
) -> Result<Vec<DailyBar>, ClientError> {
    let params = HistodayParams::builder()
        .source_sym(symbol)
        .target_sym(quote)
        .limit(days)
        .build();
    debug!("Fetching historical data with {params:?}");

    let response = match client.call::<Histoday>(params).await {
        Ok(response) => response,
        Err(ClientError::Status(status)) => {
            warn!("Error fetching historical data for {symbol}: {status}");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err),
    };

    if let Some(message) = response.status.error_message() {
        warn!("CryptoCompare rejected the history request for {symbol}: {message}");
    }

    let bars = response
        .into_entries()
        .into_iter()
        .map(|day| DailyBar {
            coin: symbol.to_string(),
            time: day.time.map(cell_value),
            high: day.high.map(cell_value),
            low: day.low.map(cell_value),
            open: day.open.map(cell_value),
            close: day.close.map(cell_value),
            volume_from: day.volumefrom.map(cell_value),
            volume_to: day.volumeto.map(cell_value),
        })
        .collect();

    Ok(bars)
}
