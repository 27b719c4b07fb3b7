mod collector;
mod fetcher;
mod output;
mod settings;

use anyhow::Context;
use clap::Parser;
use cointally_coingecko::{CoinGeckoClient, MarketChartParams, RawResponse};
use cointally_cryptocompare::CryptocompareClient;
use dotenv::dotenv;
use log::{info, warn};
use settings::{ApiArgs, Args, Command, CollectSettings, MarketChartArgs};

async fn run_collect(api: &ApiArgs, settings: CollectSettings) -> anyhow::Result<()> {
    let client = CryptocompareClient::with_base_url(
        &api.cryptocompare_base_url,
        api.cryptocompare_api_key.as_deref(),
    );

    info!(
        "Collecting {} coins with {} days of history into {}",
        settings.top_limit,
        settings.history_days,
        settings.output_dir.display()
    );

    let report = collector::collect(&client, &settings).await?;

    if !report.failed.is_empty() {
        warn!("Skipped {} coins: {}", report.failed.len(), report.failed.join(", "));
    }
    info!("Collected {} daily bars for {} coins", report.bars, report.coins);
    println!("{}", report.summary());

    Ok(())
}

fn print_raw(response: RawResponse) {
    if !response.status.is_success() {
        warn!("CoinGecko returned status {}", response.status);
    }
    println!("{}", response.body);
}

fn coingecko_client(api: &ApiArgs) -> CoinGeckoClient {
    if api.coingecko_api_key.is_none() {
        warn!("COINGECKO_API_KEY is not set, sending the request without a key");
    }
    CoinGeckoClient::with_base_url(&api.coingecko_base_url, api.coingecko_api_key.as_deref())
}

async fn run_ping(api: &ApiArgs) -> anyhow::Result<()> {
    let response = coingecko_client(api)
        .ping()
        .await
        .context("Failed to reach CoinGecko")?;
    print_raw(response);

    Ok(())
}

async fn run_market_chart(api: &ApiArgs, chart: MarketChartArgs) -> anyhow::Result<()> {
    let params = MarketChartParams {
        vs_currency: &chart.vs_currency,
        days: chart.days,
    };
    let response = coingecko_client(api)
        .market_chart(&chart.coin, &params)
        .await
        .with_context(|| format!("Failed to fetch the {} market chart", chart.coin))?;
    print_raw(response);

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let args = Args::parse();

    match args.command.unwrap_or_default() {
        Command::Collect(collect) => run_collect(&args.api, collect.into()).await,
        Command::Ping => run_ping(&args.api).await,
        Command::MarketChart(chart) => run_market_chart(&args.api, chart).await,
    }
}
