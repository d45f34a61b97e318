//! Behavior tests for the Historical Data accessor and caller-driven paging.

mod support;

use std::collections::HashSet;

use intrinio_core::{
    Frequency, HistoricalDataApi, HistoricalDataOptions, HistoricalDataResponse, Identifier,
    IntrinioClient, IsoDate, NextPage, SortOrder, Tag, DEFAULT_PAGE_SIZE,
};
use support::{fake_client, static_client, StaticHttpClient, SERIES_LEN};

fn aapl() -> Identifier {
    Identifier::new("AAPL")
}

fn close_price() -> Tag {
    Tag::new("close_price")
}

async fn collect_all_pages(
    client: &IntrinioClient,
    mut options: HistoricalDataOptions,
) -> Vec<HistoricalDataResponse> {
    let (identifier, tag) = (aapl(), close_price());
    let mut pages = Vec::new();
    loop {
        let page = client
            .get_historical_data(&identifier, &tag, &options)
            .await
            .expect("page should load");
        let next = page.next_page.clone();
        pages.push(page);
        match next {
            Some(token) => options = options.next_page(token),
            None => return pages,
        }
    }
}

fn dates(page: &HistoricalDataResponse) -> Vec<IsoDate> {
    page.historical_data.iter().map(|point| point.date).collect()
}

// =============================================================================
// Page size and continuation tokens
// =============================================================================

#[tokio::test]
async fn first_page_holds_at_most_page_size_and_a_token_when_more_exist() {
    let (_, client) = fake_client();
    let options = HistoricalDataOptions::new().page_size(100);

    let page = client
        .get_historical_data(&aapl(), &close_price(), &options)
        .await
        .expect("page should load");

    assert_eq!(page.len(), 100);
    assert!(page.has_next_page(), "250 points exceed one page of 100");
    assert_eq!(page.identifier.as_deref(), Some("AAPL"));
    assert_eq!(page.item.as_deref(), Some("close_price"));
}

#[tokio::test]
async fn no_token_is_returned_when_the_series_fits_in_one_page() {
    let (_, client) = fake_client();
    let options = HistoricalDataOptions::new()
        .start_date(IsoDate::parse("2019-03-01").expect("valid"))
        .end_date(IsoDate::parse("2019-03-31").expect("valid"))
        .page_size(100);

    let page = client
        .get_historical_data(&aapl(), &close_price(), &options)
        .await
        .expect("page should load");

    assert_eq!(page.len(), 31);
    assert!(!page.has_next_page());
}

#[tokio::test]
async fn following_tokens_yields_disjoint_contiguous_pages() {
    let (fake, client) = fake_client();

    for sort_order in [SortOrder::Desc, SortOrder::Asc] {
        let pages = collect_all_pages(
            &client,
            HistoricalDataOptions::new().sort_order(sort_order).page_size(100),
        )
        .await;

        assert_eq!(pages.len(), 3);
        assert_eq!(
            pages.iter().map(HistoricalDataResponse::len).collect::<Vec<_>>(),
            vec![100, 100, 50]
        );

        let all_dates = pages.iter().flat_map(dates).collect::<Vec<_>>();
        let unique = all_dates.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), SERIES_LEN, "pages must not overlap");

        let mut expected = fake.series_dates();
        if sort_order == SortOrder::Desc {
            expected.reverse();
        }
        assert_eq!(all_dates, expected, "pages must join without gaps");
    }
}

#[tokio::test]
async fn tokens_are_forwarded_verbatim() {
    let (fake, client) = fake_client();
    let first = client
        .get_historical_data(&aapl(), &close_price(), &HistoricalDataOptions::new())
        .await
        .expect("page should load");
    let token = first.next_page.expect("more pages exist");

    client
        .get_historical_data(
            &aapl(),
            &close_price(),
            &HistoricalDataOptions::new().next_page(token.clone()),
        )
        .await
        .expect("second page should load");

    let requests = fake.recorded_requests();
    assert_eq!(requests[1].query_value("next_page"), Some(token.as_str()));
}

#[tokio::test]
async fn reusing_a_consumed_token_is_a_remote_error() {
    let (_, client) = fake_client();
    let first = client
        .get_historical_data(&aapl(), &close_price(), &HistoricalDataOptions::new())
        .await
        .expect("page should load");
    let options = HistoricalDataOptions::new().next_page(first.next_page.expect("token"));

    client
        .get_historical_data(&aapl(), &close_price(), &options)
        .await
        .expect("first use succeeds");
    let error = client
        .get_historical_data(&aapl(), &close_price(), &options)
        .await
        .expect_err("token is single-use");

    assert_eq!(error.status_code(), 400);
    assert_eq!(error.message(), "Invalid next_page token");
}

#[tokio::test]
async fn restored_token_behaves_like_the_returned_one() {
    let (_, client) = fake_client();
    let first = client
        .get_historical_data(&aapl(), &close_price(), &HistoricalDataOptions::new())
        .await
        .expect("page should load");
    let stored = first.next_page.expect("token").to_string();

    let restored = NextPage::from_token(stored).expect("non-empty token");
    let second = client
        .get_historical_data(
            &aapl(),
            &close_price(),
            &HistoricalDataOptions::new().next_page(restored),
        )
        .await
        .expect("restored token should work");

    assert_eq!(second.len(), 100);
}

// =============================================================================
// Defaults
// =============================================================================

#[tokio::test]
async fn omitting_options_equals_passing_documented_defaults() {
    let (fake, client) = fake_client();

    let omitted = client
        .get_historical_data(&aapl(), &close_price(), &HistoricalDataOptions::new())
        .await
        .expect("page should load");
    let explicit = client
        .get_historical_data(&aapl(), &close_price(), &HistoricalDataOptions::with_defaults())
        .await
        .expect("page should load");

    assert_eq!(omitted.historical_data, explicit.historical_data);
    assert_eq!(omitted.has_next_page(), explicit.has_next_page());
    assert_eq!(omitted.len(), DEFAULT_PAGE_SIZE as usize);
    assert!(dates(&omitted).windows(2).all(|pair| pair[0] > pair[1]), "default is desc");

    let requests = fake.recorded_requests();
    let sent = |index: usize| {
        requests[index]
            .query
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
    };
    assert_eq!(sent(0), vec!["api_key"], "unset options are not sent");
    assert_eq!(
        sent(1),
        vec!["frequency", "sort_order", "page_size", "api_key"]
    );
}

#[tokio::test]
async fn ascending_page_of_two_returns_the_two_oldest_points() {
    let (fake, client) = fake_client();
    let options = HistoricalDataOptions::new()
        .sort_order(SortOrder::Asc)
        .page_size(2);

    let page = client
        .get_historical_data(&aapl(), &close_price(), &options)
        .await
        .expect("page should load");

    assert_eq!(page.len(), 2);
    assert_eq!(dates(&page), fake.series_dates()[..2].to_vec());
    assert!(page.has_next_page());
}

#[tokio::test]
async fn filters_are_sent_in_wire_format() {
    let (fake, client) = fake_client();
    let options = HistoricalDataOptions::new()
        .frequency(Frequency::Weekly)
        .type_filter("FY")
        .start_date(IsoDate::parse("2019-02-01").expect("valid"))
        .end_date(IsoDate::parse("2019-04-30").expect("valid"));

    let page = client
        .get_historical_data(&aapl(), &close_price(), &options)
        .await
        .expect("page should load");

    assert!(!page.is_empty());
    let request = &fake.recorded_requests()[0];
    assert_eq!(request.query_value("frequency"), Some("weekly"));
    assert_eq!(request.query_value("type"), Some("FY"));
    assert_eq!(request.query_value("start_date"), Some("2019-02-01"));
    assert_eq!(request.query_value("end_date"), Some("2019-04-30"));
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn unknown_series_is_a_not_found_error() {
    let (_, client) = fake_client();

    let error = client
        .get_historical_data(
            &Identifier::new("ZZZZ"),
            &close_price(),
            &HistoricalDataOptions::new(),
        )
        .await
        .expect_err("unknown identifier should fail");

    assert_eq!(error.status_code(), 404);
}

#[tokio::test]
async fn malformed_body_keeps_status_and_raw_body() {
    let client = static_client(StaticHttpClient::respond(
        200,
        r#"{"historical_data": [{"date": "yesterday", "value": 1}]}"#,
    ));

    let error = client
        .get_historical_data(&aapl(), &close_price(), &HistoricalDataOptions::new())
        .await
        .expect_err("bad date must fail");

    assert_eq!(error.status_code(), 200);
    assert!(error.raw_body().is_some_and(|body| body.contains("yesterday")));
    assert!(error.message().starts_with("unexpected response body"));
}

#[tokio::test]
async fn success_body_without_observations_is_an_error_not_an_empty_page() {
    for body in [
        "{}",
        r#"{"message": "Service is under maintenance"}"#,
        r#"{"data": [{"date": "2019-01-02", "value": 157.92}], "next_page": null}"#,
    ] {
        let client = static_client(StaticHttpClient::respond(200, body));

        let error = client
            .get_historical_data(&aapl(), &close_price(), &HistoricalDataOptions::new())
            .await
            .expect_err("a page needs historical_data");

        assert_eq!(error.status_code(), 200, "{body}");
        assert_eq!(error.raw_body(), Some(body));
        assert!(error.message().starts_with("unexpected response body"));
    }
}
