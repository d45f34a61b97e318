use crate::api::{ApiFuture, ApiTransport, HistoricalDataApi};
use crate::error::RemoteApiError;
use crate::{Frequency, HistoricalDataResponse, Identifier, IsoDate, NextPage, SortOrder, Tag};

/// Frequency the service applies when none is sent.
pub const DEFAULT_FREQUENCY: Frequency = Frequency::Daily;
/// Sort order the service applies when none is sent.
pub const DEFAULT_SORT_ORDER: SortOrder = SortOrder::Desc;
/// Page size the service applies when none is sent.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Optional filters for a historical data request.
///
/// Every field is independent. Unset fields are not sent, so the service
/// defaults ([`DEFAULT_FREQUENCY`], [`DEFAULT_SORT_ORDER`],
/// [`DEFAULT_PAGE_SIZE`]) apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoricalDataOptions {
    pub frequency: Option<Frequency>,
    /// Service-defined period filter such as `FY`, `QTR`, `TTM` or `YTD`.
    pub type_filter: Option<String>,
    pub start_date: Option<IsoDate>,
    pub end_date: Option<IsoDate>,
    pub sort_order: Option<SortOrder>,
    pub page_size: Option<u32>,
    pub next_page: Option<NextPage>,
}

impl HistoricalDataOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with every documented default set explicitly.
    pub fn with_defaults() -> Self {
        Self::new()
            .frequency(DEFAULT_FREQUENCY)
            .sort_order(DEFAULT_SORT_ORDER)
            .page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn type_filter(mut self, type_filter: impl Into<String>) -> Self {
        self.type_filter = Some(type_filter.into());
        self
    }

    pub fn start_date(mut self, start_date: IsoDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn end_date(mut self, end_date: IsoDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn next_page(mut self, next_page: NextPage) -> Self {
        self.next_page = Some(next_page);
        self
    }

    pub fn effective_frequency(&self) -> Frequency {
        self.frequency.unwrap_or(DEFAULT_FREQUENCY)
    }

    pub fn effective_sort_order(&self) -> SortOrder {
        self.sort_order.unwrap_or(DEFAULT_SORT_ORDER)
    }

    pub fn effective_page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Query pairs in wire order, only for fields that are set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(7);
        if let Some(frequency) = self.frequency {
            query.push(("frequency", frequency.as_str().to_owned()));
        }
        if let Some(type_filter) = &self.type_filter {
            query.push(("type", type_filter.clone()));
        }
        if let Some(start_date) = self.start_date {
            query.push(("start_date", start_date.format_iso()));
        }
        if let Some(end_date) = self.end_date {
            query.push(("end_date", end_date.format_iso()));
        }
        if let Some(sort_order) = self.sort_order {
            query.push(("sort_order", sort_order.as_str().to_owned()));
        }
        if let Some(page_size) = self.page_size {
            query.push(("page_size", page_size.to_string()));
        }
        if let Some(next_page) = &self.next_page {
            query.push(("next_page", next_page.as_str().to_owned()));
        }
        query
    }
}

/// Historical Data API accessor.
///
/// Returns one page per call. To walk a full series, call again with
/// `options.next_page(token)` until the response carries no token.
#[derive(Clone)]
pub struct HistoricalDataClient {
    transport: ApiTransport,
}

impl HistoricalDataClient {
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    async fn fetch_page(
        &self,
        identifier: &Identifier,
        tag: &Tag,
        options: &HistoricalDataOptions,
    ) -> Result<HistoricalDataResponse, RemoteApiError> {
        let response = self
            .transport
            .get(
                &["historical_data", identifier.as_str(), tag.as_str()],
                options.to_query(),
            )
            .await?;

        serde_json::from_str::<HistoricalDataResponse>(&response.body).map_err(|e| {
            RemoteApiError::unexpected_body(response.status, response.body.as_str(), e.to_string())
        })
    }
}

impl HistoricalDataApi for HistoricalDataClient {
    fn get_historical_data<'a>(
        &'a self,
        identifier: &'a Identifier,
        tag: &'a Tag,
        options: &'a HistoricalDataOptions,
    ) -> ApiFuture<'a, HistoricalDataResponse> {
        Box::pin(self.fetch_page(identifier, tag, options))
    }
}
