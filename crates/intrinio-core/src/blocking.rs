//! Synchronous variants of the accessor operations.
//!
//! [`BlockingClient`] owns a current-thread tokio runtime and drives the async
//! accessor to completion on every call. Results and errors are identical to
//! the async form.
//!
//! Do not call these methods from inside an async runtime; tokio panics when
//! `block_on` is nested.
//!
//! ```rust,ignore
//! use intrinio_core::blocking::{BlockingClient, BlockingDataPointApi};
//! use intrinio_core::{Identifier, IntrinioClient, Tag};
//!
//! let client = BlockingClient::new(IntrinioClient::from_env()?)?;
//! let close = client.get_number(&Identifier::new("AAPL"), &Tag::new("close_price"))?;
//! ```

use rust_decimal::Decimal;
use tokio::runtime::{Builder, Runtime};

use crate::api::{DataPointApi, HistoricalDataApi, HistoricalDataOptions};
use crate::error::RemoteApiError;
use crate::{HistoricalDataResponse, Identifier, Tag};

/// Blocking form of [`DataPointApi`].
pub trait BlockingDataPointApi {
    fn get_number(&self, identifier: &Identifier, tag: &Tag) -> Result<Decimal, RemoteApiError>;

    fn get_text(&self, identifier: &Identifier, tag: &Tag) -> Result<String, RemoteApiError>;
}

/// Blocking form of [`HistoricalDataApi`].
pub trait BlockingHistoricalDataApi {
    fn get_historical_data(
        &self,
        identifier: &Identifier,
        tag: &Tag,
        options: &HistoricalDataOptions,
    ) -> Result<HistoricalDataResponse, RemoteApiError>;
}

/// Wraps an async accessor with a private runtime.
pub struct BlockingClient<C> {
    inner: C,
    runtime: Runtime,
}

impl<C> BlockingClient<C> {
    pub fn new(inner: C) -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    /// The wrapped async accessor.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: DataPointApi> BlockingDataPointApi for BlockingClient<C> {
    fn get_number(&self, identifier: &Identifier, tag: &Tag) -> Result<Decimal, RemoteApiError> {
        self.runtime.block_on(self.inner.get_number(identifier, tag))
    }

    fn get_text(&self, identifier: &Identifier, tag: &Tag) -> Result<String, RemoteApiError> {
        self.runtime.block_on(self.inner.get_text(identifier, tag))
    }
}

impl<C: HistoricalDataApi> BlockingHistoricalDataApi for BlockingClient<C> {
    fn get_historical_data(
        &self,
        identifier: &Identifier,
        tag: &Tag,
        options: &HistoricalDataOptions,
    ) -> Result<HistoricalDataResponse, RemoteApiError> {
        self.runtime
            .block_on(self.inner.get_historical_data(identifier, tag, options))
    }
}
