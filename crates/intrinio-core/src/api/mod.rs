//! Accessor contracts and their HTTP implementations.
//!
//! | Trait | Operation | Endpoint |
//! |-------|-----------|----------|
//! | [`DataPointApi`] | `get_number` | `GET /data_point/{identifier}/{tag}/number` |
//! | [`DataPointApi`] | `get_text` | `GET /data_point/{identifier}/{tag}/text` |
//! | [`HistoricalDataApi`] | `get_historical_data` | `GET /historical_data/{identifier}/{tag}` |
//!
//! Each call is one independent round trip: no retry, no caching, no
//! automatic pagination. Blocking variants live in [`crate::blocking`].

use std::future::Future;
use std::pin::Pin;

use rust_decimal::Decimal;

use crate::error::RemoteApiError;
use crate::{HistoricalDataResponse, Identifier, Tag};

mod data_point;
mod historical_data;
mod transport;

pub use data_point::DataPointClient;
pub use historical_data::{
    HistoricalDataClient, HistoricalDataOptions, DEFAULT_FREQUENCY, DEFAULT_PAGE_SIZE,
    DEFAULT_SORT_ORDER,
};
pub use transport::ApiTransport;

/// Boxed future returned by every accessor operation.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, RemoteApiError>> + Send + 'a>>;

/// Single data point lookups.
///
/// Implementations must be `Send + Sync`; they are shared across concurrent
/// callers.
pub trait DataPointApi: Send + Sync {
    /// Numeric value of `tag` for `identifier`.
    ///
    /// # Errors
    ///
    /// [`RemoteApiError`] when the pair is unknown, the key is unauthorized,
    /// the service is unreachable, or the body is not a number.
    fn get_number<'a>(&'a self, identifier: &'a Identifier, tag: &'a Tag) -> ApiFuture<'a, Decimal>;

    /// Text value of `tag` for `identifier`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`get_number`](DataPointApi::get_number).
    fn get_text<'a>(&'a self, identifier: &'a Identifier, tag: &'a Tag) -> ApiFuture<'a, String>;
}

/// Paged historical series lookups.
pub trait HistoricalDataApi: Send + Sync {
    /// One page of `(date, value)` observations and the token for the next.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`DataPointApi::get_number`]; an expired or
    /// reused `next_page` token is reported by the service as a client error.
    fn get_historical_data<'a>(
        &'a self,
        identifier: &'a Identifier,
        tag: &'a Tag,
        options: &'a HistoricalDataOptions,
    ) -> ApiFuture<'a, HistoricalDataResponse>;
}
