//! # Domain Models
//!
//! Request keys and response models for the Intrinio data point and
//! historical data endpoints.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Identifier`] | Opaque security/company key (ticker, FIGI, ISIN, CUSIP, CIK, LEI, ID) |
//! | [`Tag`] | Opaque data tag such as `close_price` |
//! | [`IsoDate`] | `YYYY-MM-DD` calendar date |
//! | [`Frequency`] | Historical series frequency |
//! | [`SortOrder`] | `asc` / `desc` |
//! | [`NextPage`] | Opaque pagination token |
//! | [`HistoricalDataPoint`] | One `(date, value)` observation |
//! | [`HistoricalDataResponse`] | A page of observations plus continuation token |

mod date;
mod historical;
mod identifier;

pub use date::IsoDate;
pub use historical::{
    Frequency, HistoricalDataPoint, HistoricalDataResponse, NextPage, SortOrder,
};
pub use identifier::{Identifier, Tag};
