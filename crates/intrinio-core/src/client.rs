use std::sync::Arc;

use rust_decimal::Decimal;

use crate::api::{
    ApiFuture, ApiTransport, DataPointApi, DataPointClient, HistoricalDataApi,
    HistoricalDataClient, HistoricalDataOptions,
};
use crate::config::ClientConfig;
use crate::error::ConfigError;
use crate::http_client::HttpClient;
use crate::{HistoricalDataResponse, Identifier, Tag};

/// Both accessors over one shared transport.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct IntrinioClient {
    data_point: DataPointClient,
    historical_data: HistoricalDataClient,
}

impl IntrinioClient {
    /// Client using the reqwest transport.
    pub fn new(config: ClientConfig) -> Self {
        Self::from_transport(ApiTransport::with_reqwest(config))
    }

    /// Client using [`ClientConfig::from_env`] and the reqwest transport.
    pub fn from_env() -> Result<Self, ConfigError> {
        ClientConfig::from_env().map(Self::new)
    }

    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self::from_transport(ApiTransport::new(config, http_client))
    }

    pub fn from_transport(transport: ApiTransport) -> Self {
        Self {
            data_point: DataPointClient::new(transport.clone()),
            historical_data: HistoricalDataClient::new(transport),
        }
    }

    pub fn data_point(&self) -> &DataPointClient {
        &self.data_point
    }

    pub fn historical_data(&self) -> &HistoricalDataClient {
        &self.historical_data
    }
}

impl DataPointApi for IntrinioClient {
    fn get_number<'a>(
        &'a self,
        identifier: &'a Identifier,
        tag: &'a Tag,
    ) -> ApiFuture<'a, Decimal> {
        self.data_point.get_number(identifier, tag)
    }

    fn get_text<'a>(&'a self, identifier: &'a Identifier, tag: &'a Tag) -> ApiFuture<'a, String> {
        self.data_point.get_text(identifier, tag)
    }
}

impl HistoricalDataApi for IntrinioClient {
    fn get_historical_data<'a>(
        &'a self,
        identifier: &'a Identifier,
        tag: &'a Tag,
        options: &'a HistoricalDataOptions,
    ) -> ApiFuture<'a, HistoricalDataResponse> {
        self.historical_data
            .get_historical_data(identifier, tag, options)
    }
}
