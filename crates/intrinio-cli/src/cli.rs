//! CLI argument definitions.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `number` | Numeric data point for an identifier/tag |
//! | `text` | Text data point for an identifier/tag |
//! | `historical` | Historical series, one or more pages |
//!
//! # Global Options
//!
//! | Option | Env | Default |
//! |--------|-----|---------|
//! | `--api-key` | `INTRINIO_API_KEY` | required |
//! | `--base-url` | `INTRINIO_BASE_URL` | `https://api-v2.intrinio.com` |
//! | `--timeout-ms` | `INTRINIO_TIMEOUT_MS` | `30000` |
//! | `--pretty` | | `false` |
//!
//! # Examples
//!
//! ```bash
//! intrinio number AAPL close_price
//! intrinio historical AAPL close_price --sort-order asc --page-size 2 --pretty
//! intrinio historical AAPL marketcap --frequency quarterly --pages 5
//! ```

use clap::{Args, Parser, Subcommand};

/// Intrinio data point and historical data client.
#[derive(Debug, Parser)]
#[command(
    name = "intrinio",
    author,
    version,
    about = "Intrinio data point and historical data CLI"
)]
pub struct Cli {
    /// Intrinio API key.
    #[arg(long, global = true, env = "INTRINIO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the API base URL.
    #[arg(long, global = true, env = "INTRINIO_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds.
    #[arg(long, global = true, env = "INTRINIO_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Pretty-print JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a numeric data point.
    ///
    ///   intrinio number AAPL close_price
    Number(DataPointArgs),

    /// Fetch a text data point.
    ///
    ///   intrinio text AAPL name
    Text(DataPointArgs),

    /// Fetch historical data, following continuation tokens up to --pages.
    ///
    ///   intrinio historical AAPL close_price --start-date 2019-01-01
    Historical(HistoricalArgs),
}

#[derive(Debug, Args)]
pub struct DataPointArgs {
    /// Ticker, FIGI, ISIN, CUSIP, CIK, LEI or Intrinio ID.
    pub identifier: String,

    /// Data tag, e.g. close_price.
    pub tag: String,
}

#[derive(Debug, Args)]
pub struct HistoricalArgs {
    /// Ticker, FIGI, ISIN, CUSIP, CIK, LEI or Intrinio ID.
    pub identifier: String,

    /// Data tag, e.g. close_price.
    pub tag: String,

    /// daily, weekly, monthly, quarterly or yearly.
    #[arg(long)]
    pub frequency: Option<String>,

    /// Period filter such as FY, QTR, TTM or YTD.
    #[arg(long = "type")]
    pub type_filter: Option<String>,

    /// Earliest date, YYYY-MM-DD.
    #[arg(long)]
    pub start_date: Option<String>,

    /// Latest date, YYYY-MM-DD.
    #[arg(long)]
    pub end_date: Option<String>,

    /// asc or desc.
    #[arg(long)]
    pub sort_order: Option<String>,

    /// Observations per page.
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Continuation token from a previous response.
    #[arg(long)]
    pub next_page: Option<String>,

    /// Maximum number of pages to fetch.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,
}
