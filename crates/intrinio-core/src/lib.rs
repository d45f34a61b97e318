//! # Intrinio Core
//!
//! Typed client for the Intrinio Data Point and Historical Data REST APIs.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Accessor traits and their HTTP implementations |
//! | [`blocking`] | Synchronous variants of every accessor operation |
//! | [`config`] | Base URL, credentials and timeout |
//! | [`domain`] | Identifiers, tags, dates and response models |
//! | [`error`] | Error types |
//! | [`http_client`] | HTTP transport abstraction |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use intrinio_core::{
//!     HistoricalDataApi, HistoricalDataOptions, Identifier, IntrinioClient, SortOrder, Tag,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = IntrinioClient::from_env()?;
//!     let identifier = Identifier::new("AAPL");
//!     let tag = Tag::new("close_price");
//!
//!     let mut options = HistoricalDataOptions::new().sort_order(SortOrder::Asc).page_size(250);
//!     loop {
//!         let page = client.get_historical_data(&identifier, &tag, &options).await?;
//!         for point in &page.historical_data {
//!             println!("{} {}", point.date, point.value);
//!         }
//!         match page.next_page {
//!             Some(token) => options = options.next_page(token),
//!             None => break,
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every remote operation fails with [`RemoteApiError`], which carries the HTTP
//! status (`0` when nothing came back), a message and the raw body. There is no
//! retry or fallback in this crate.
//!
//! ## Security
//!
//! - The API key is read from `INTRINIO_API_KEY` or passed explicitly
//! - Credentials are redacted from `Debug` output and never logged

pub mod api;
pub mod blocking;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;

pub use api::{
    ApiFuture, ApiTransport, DataPointApi, DataPointClient, HistoricalDataApi,
    HistoricalDataClient, HistoricalDataOptions, DEFAULT_FREQUENCY, DEFAULT_PAGE_SIZE,
    DEFAULT_SORT_ORDER,
};

pub use blocking::{BlockingClient, BlockingDataPointApi, BlockingHistoricalDataApi};

pub use client::IntrinioClient;

pub use config::ClientConfig;

pub use domain::{
    Frequency, HistoricalDataPoint, HistoricalDataResponse, Identifier, IsoDate, NextPage,
    SortOrder, Tag,
};

pub use error::{ConfigError, RemoteApiError, ValidationError};

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};

pub use rust_decimal::Decimal;
