use crate::fetcher::{fetch_historical_data, fetch_top_coins};
use crate::output::{
    write_csv, write_json, HISTORICAL_PRICES_CSV, HISTORICAL_PRICES_JSON, TOP_COINS_CSV,
    TOP_COINS_JSON,
};
use crate::settings::CollectSettings;
use anyhow::Context;
use cointally_cryptocompare::CryptocompareClient;
use cointally_models::{AssetSummary, DailyBar};
use log::{info, warn};
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Keeps consecutive requests at least `interval` apart, measured between
/// their starts. The first call returns immediately.
pub struct Pacer {
    interval: Duration,
    last: Option<Instant>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub async fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                sleep(self.interval - elapsed).await;
            }
        }
        self.last = Some(Instant::now());
    }
}

#[derive(Debug, Default)]
pub struct CollectionReport {
    pub coins: usize,
    pub bars: usize,
    /// Tickers whose history request failed and were skipped.
    pub failed: Vec<String>,
    /// Files written by this run, in write order.
    pub written: Vec<PathBuf>,
}

impl CollectionReport {
    pub fn summary(&self) -> String {
        if self.written.is_empty() {
            return "Data retrieval complete. No files were written".to_string();
        }

        let files = self
            .written
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        format!("Data retrieval complete. Check {files}")
    }
}

/// Fetches the top list and the history of every listed coin, writing both
/// to `settings.output_dir`.
///
/// The top-list files are always written. The history files are written only
/// when at least one bar was collected. A coin whose history cannot be fetched
/// is logged and skipped.
pub async fn collect(
    client: &CryptocompareClient,
    settings: &CollectSettings,
) -> anyhow::Result<CollectionReport> {
    std::fs::create_dir_all(&settings.output_dir)
        .with_context(|| format!("Failed to create {}", settings.output_dir.display()))?;

    let mut report = CollectionReport::default();

    let top_coins = fetch_top_coins(client, settings.top_limit, &settings.quote)
        .await
        .context("Failed to fetch top coins")?;
    info!("Fetched {} top coins", top_coins.len());
    report.coins = top_coins.len();

    let path = settings.output_dir.join(TOP_COINS_CSV);
    write_csv(&path, &AssetSummary::COLUMNS, &top_coins)?;
    report.written.push(path);

    let path = settings.output_dir.join(TOP_COINS_JSON);
    write_json(&path, &top_coins)?;
    report.written.push(path);

    let mut pacer = Pacer::new(settings.delay);
    let mut all_bars: Vec<DailyBar> = Vec::new();

    for (index, coin) in top_coins.iter().enumerate() {
        pacer.wait().await;

        let history = fetch_historical_data(
            client,
            &coin.name,
            settings.history_days,
            &settings.quote,
        )
        .await;
        match history {
            Ok(bars) => {
                info!(
                    "[{}/{}] {}: {} daily bars",
                    index + 1,
                    top_coins.len(),
                    coin.name,
                    bars.len()
                );
                all_bars.extend(bars);
            }
            Err(e) => {
                warn!("Error processing {}: {}", coin.name, e);
                report.failed.push(coin.name.clone());
            }
        }
    }

    report.bars = all_bars.len();

    if all_bars.is_empty() {
        warn!(
            "No historical data collected, skipping {HISTORICAL_PRICES_CSV} and \
             {HISTORICAL_PRICES_JSON}"
        );
        return Ok(report);
    }

    let path = settings.output_dir.join(HISTORICAL_PRICES_CSV);
    write_csv(&path, &DailyBar::COLUMNS, &all_bars)?;
    report.written.push(path);

    let path = settings.output_dir.join(HISTORICAL_PRICES_JSON);
    write_json(&path, &all_bars)?;
    report.written.push(path);

    Ok(report)
}
