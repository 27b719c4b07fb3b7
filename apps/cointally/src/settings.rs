use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TOP_LIMIT: u32 = 100;
pub const DEFAULT_HISTORY_DAYS: u32 = 2000;
pub const DEFAULT_QUOTE: &str = "USD";
pub const DEFAULT_DELAY_MS: u64 = 2500;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub api: ApiArgs,

    /// Defaults to `collect` with its default options
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(ClapArgs, Debug)]
pub struct ApiArgs {
    /// CryptoCompare API key, optional for the endpoints used here
    #[arg(long, env = "CRYPTOCOMPARE_API_KEY", hide_env_values = true)]
    pub cryptocompare_api_key: Option<String>,

    #[arg(long, env = "CRYPTOCOMPARE_BASE_URL", default_value = cointally_cryptocompare::BASE_URL)]
    pub cryptocompare_base_url: String,

    /// CoinGecko demo API key
    #[arg(long, env = "COINGECKO_API_KEY", hide_env_values = true)]
    pub coingecko_api_key: Option<String>,

    #[arg(long, env = "COINGECKO_BASE_URL", default_value = cointally_coingecko::BASE_URL)]
    pub coingecko_base_url: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the top coins and their daily history into CSV and JSON files
    Collect(CollectArgs),
    /// Print the CoinGecko ping response
    Ping,
    /// Print a CoinGecko market chart
    MarketChart(MarketChartArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Collect(CollectArgs::default())
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CollectArgs {
    /// Number of coins to take from the market-cap ranking
    #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
    pub limit: u32,

    /// Daily bars to request per coin
    #[arg(long, default_value_t = DEFAULT_HISTORY_DAYS)]
    pub days: u32,

    /// Quote currency for prices and ranking
    #[arg(long, default_value = DEFAULT_QUOTE)]
    pub quote: String,

    /// Minimum spacing between history requests, 0 disables it
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Default for CollectArgs {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TOP_LIMIT,
            days: DEFAULT_HISTORY_DAYS,
            quote: DEFAULT_QUOTE.to_string(),
            delay_ms: DEFAULT_DELAY_MS,
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct MarketChartArgs {
    /// CoinGecko coin id
    #[arg(long, default_value = "bitcoin")]
    pub coin: String,

    #[arg(long, default_value = "usd")]
    pub vs_currency: String,

    #[arg(long, default_value_t = 500)]
    pub days: u32,
}

/// Resolved parameters of a collection run.
#[derive(Debug, Clone)]
pub struct CollectSettings {
    pub top_limit: u32,
    pub history_days: u32,
    pub quote: String,
    pub delay: Duration,
    pub output_dir: PathBuf,
}

impl From<CollectArgs> for CollectSettings {
    fn from(args: CollectArgs) -> Self {
        Self {
            top_limit: args.limit,
            history_days: args.days,
            quote: args.quote,
            delay: Duration::from_millis(args.delay_ms),
            output_dir: args.output_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_default_collect() {
        let args = Args::try_parse_from(["cointally"]).unwrap();
        let Command::Collect(collect) = args.command.unwrap_or_default() else {
            panic!("expected collect");
        };
        let settings = CollectSettings::from(collect);

        assert_eq!(settings.top_limit, 100);
        assert_eq!(settings.history_days, 2000);
        assert_eq!(settings.quote, "USD");
        assert_eq!(settings.delay, Duration::from_millis(2500));
        assert_eq!(settings.output_dir, PathBuf::from("."));
    }

    #[test]
    fn collect_flags_override_defaults() {
        let args = Args::try_parse_from([
            "cointally",
            "collect",
            "--limit",
            "10",
            "--days",
            "30",
            "--delay-ms",
            "0",
            "--output-dir",
            "out",
        ])
        .unwrap();
        let Some(Command::Collect(collect)) = args.command else {
            panic!("expected collect");
        };
        let settings = CollectSettings::from(collect);

        assert_eq!(settings.top_limit, 10);
        assert_eq!(settings.history_days, 30);
        assert!(settings.delay.is_zero());
        assert_eq!(settings.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn market_chart_defaults() {
        let args = Args::try_parse_from(["cointally", "market-chart"]).unwrap();
        let Some(Command::MarketChart(chart)) = args.command else {
            panic!("expected market-chart");
        };

        assert_eq!(chart.coin, "bitcoin");
        assert_eq!(chart.vs_currency, "usd");
        assert_eq!(chart.days, 500);
    }
}
