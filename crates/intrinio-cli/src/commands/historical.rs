use std::str::FromStr;

use intrinio_core::{
    Frequency, HistoricalDataApi, HistoricalDataOptions, HistoricalDataPoint, Identifier, IsoDate,
    NextPage, SortOrder, Tag,
};
use serde::Serialize;
use tracing::debug;

use crate::cli::HistoricalArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct HistoricalData {
    identifier: Identifier,
    tag: Tag,
    historical_data: Vec<HistoricalDataPoint>,
    /// Token to resume from; `null` once the series is exhausted.
    next_page: Option<NextPage>,
}

/// Fetches up to `args.pages` pages, resuming from each returned token.
pub async fn run<A: HistoricalDataApi>(
    args: &HistoricalArgs,
    api: &A,
) -> Result<CommandResult, CliError> {
    let identifier = Identifier::parse(&args.identifier)?;
    let tag = Tag::parse(&args.tag)?;
    let mut options = options_from_args(args)?;

    let mut historical_data = Vec::new();
    let mut next_page = None;
    let mut requests = 0;

    while requests < args.pages {
        let page = api.get_historical_data(&identifier, &tag, &options).await?;
        requests += 1;
        debug!(page = requests, observations = page.len(), "historical page loaded");

        historical_data.extend(page.historical_data);
        next_page = page.next_page;
        match &next_page {
            Some(token) => options = options.next_page(token.clone()),
            None => break,
        }
    }

    let data = serde_json::to_value(HistoricalData {
        identifier,
        tag,
        historical_data,
        next_page,
    })?;
    Ok(CommandResult::ok(data, requests))
}

fn options_from_args(args: &HistoricalArgs) -> Result<HistoricalDataOptions, CliError> {
    let mut options = HistoricalDataOptions::new();

    if let Some(frequency) = &args.frequency {
        options = options.frequency(Frequency::from_str(frequency)?);
    }
    if let Some(type_filter) = &args.type_filter {
        options = options.type_filter(type_filter.as_str());
    }
    if let Some(start_date) = &args.start_date {
        options = options.start_date(IsoDate::from_str(start_date)?);
    }
    if let Some(end_date) = &args.end_date {
        options = options.end_date(IsoDate::from_str(end_date)?);
    }
    if let Some(sort_order) = &args.sort_order {
        options = options.sort_order(SortOrder::from_str(sort_order)?);
    }
    if let Some(page_size) = args.page_size {
        options = options.page_size(page_size);
    }
    if let Some(token) = &args.next_page {
        options = options.next_page(NextPage::from_token(token.as_str())?);
    }

    Ok(options)
}
