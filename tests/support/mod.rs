//! In-memory stand-in for the Intrinio service used by behavior tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use intrinio_core::{
    ClientConfig, HttpClient, HttpError, HttpRequest, HttpResponse, IntrinioClient, IsoDate,
};
use serde_json::json;

pub const BASE_URL: &str = "https://fake.intrinio.test";
pub const API_KEY: &str = "test-key";
pub const SERIES_LEN: usize = 250;

/// Serves data points and one paged `AAPL/close_price` daily series.
pub struct FakeIntrinio {
    series: Vec<(IsoDate, f64)>,
    numbers: HashMap<(String, String), String>,
    texts: HashMap<(String, String), String>,
    tokens: Mutex<HashMap<String, usize>>,
    token_counter: Mutex<u64>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeIntrinio {
    pub fn new() -> Self {
        let start = IsoDate::parse("2019-01-01").expect("valid date").into_inner();
        let series = (0..SERIES_LEN)
            .map(|offset| {
                let date = start + time::Duration::days(offset as i64);
                (IsoDate::from(date), 150.0 + offset as f64 * 0.25)
            })
            .collect();

        let mut numbers = HashMap::new();
        numbers.insert(key("AAPL", "close_price"), String::from("217.5"));
        numbers.insert(key("AAPL", "marketcap"), String::from("\"1024370000000\""));
        numbers.insert(key("AAPL", "pricetoearnings"), String::from("\"na\""));

        let mut texts = HashMap::new();
        texts.insert(key("AAPL", "name"), String::from("\"Apple Inc.\""));
        texts.insert(key("AAPL", "ceo"), String::from("Tim Cook"));

        Self {
            series,
            numbers,
            texts,
            tokens: Mutex::new(HashMap::new()),
            token_counter: Mutex::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn series_dates(&self) -> Vec<IsoDate> {
        self.series.iter().map(|(date, _)| *date).collect()
    }

    fn respond(&self, request: &HttpRequest) -> HttpResponse {
        if request.query_value("api_key") != Some(API_KEY) {
            return error(401, "Unauthorized", "Your API key is invalid");
        }

        let path = request.url.strip_prefix(BASE_URL).unwrap_or(&request.url);
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                urlencoding::decode(segment)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| segment.to_owned())
            })
            .collect::<Vec<_>>();
        let segments = segments.iter().map(String::as_str).collect::<Vec<_>>();

        match segments.as_slice() {
            ["data_point", identifier, tag, "number"] => self
                .numbers
                .get(&key(identifier, tag))
                .map(|body| HttpResponse::ok_json(body.clone()))
                .unwrap_or_else(|| error(404, "Not Found", "Data point not found")),
            ["data_point", identifier, tag, "text"] => self
                .texts
                .get(&key(identifier, tag))
                .map(|body| HttpResponse::ok_json(body.clone()))
                .unwrap_or_else(|| error(404, "Not Found", "Data point not found")),
            ["historical_data", "AAPL", "close_price"] => self.historical_page(request),
            ["historical_data", _, _] => error(404, "Not Found", "No historical data found"),
            _ => error(404, "Not Found", "Route not found"),
        }
    }

    fn historical_page(&self, request: &HttpRequest) -> HttpResponse {
        let stride = match request.query_value("frequency").unwrap_or("daily") {
            "daily" => 1,
            "weekly" => 7,
            "monthly" => 30,
            "quarterly" => 91,
            "yearly" => 365,
            _ => return error(400, "Bad Request", "Invalid frequency"),
        };

        let mut bounds = (None, None);
        for (index, name) in ["start_date", "end_date"].into_iter().enumerate() {
            if let Some(raw) = request.query_value(name) {
                match IsoDate::parse(raw) {
                    Ok(date) if index == 0 => bounds.0 = Some(date),
                    Ok(date) => bounds.1 = Some(date),
                    Err(_) => return error(400, "Bad Request", "Invalid date"),
                }
            }
        }

        let descending = match request.query_value("sort_order").unwrap_or("desc") {
            "desc" => true,
            "asc" => false,
            _ => return error(400, "Bad Request", "Invalid sort_order"),
        };

        let page_size = match request.query_value("page_size").map(str::parse::<usize>) {
            None => 100,
            Some(Ok(size)) if (1..=10_000).contains(&size) => size,
            Some(_) => return error(400, "Bad Request", "Invalid page_size"),
        };

        let offset = match request.query_value("next_page") {
            None => 0,
            Some(token) => match self.tokens.lock().expect("token store").remove(token) {
                Some(offset) => offset,
                None => return error(400, "Bad Request", "Invalid next_page token"),
            },
        };

        let mut rows = self
            .series
            .iter()
            .step_by(stride)
            .filter(|(date, _)| bounds.0.map_or(true, |start| *date >= start))
            .filter(|(date, _)| bounds.1.map_or(true, |end| *date <= end))
            .collect::<Vec<_>>();
        if descending {
            rows.reverse();
        }

        let page = rows
            .iter()
            .skip(offset)
            .take(page_size)
            .map(|(date, value)| json!({ "date": date.format_iso(), "value": value }))
            .collect::<Vec<_>>();

        let next_offset = offset + page.len();
        let next_page = if next_offset < rows.len() {
            let token = self.issue_token(next_offset);
            json!(token)
        } else {
            json!(null)
        };

        HttpResponse::ok_json(
            json!({
                "historical_data": page,
                "identifier": "AAPL",
                "item": "close_price",
                "next_page": next_page,
            })
            .to_string(),
        )
    }

    fn issue_token(&self, offset: usize) -> String {
        let mut counter = self.token_counter.lock().expect("token counter");
        *counter += 1;
        let token = format!("cGFnZS17{counter:04}fQ==");
        self.tokens
            .lock()
            .expect("token store")
            .insert(token.clone(), offset);
        token
    }
}

impl HttpClient for FakeIntrinio {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = self.respond(&request);
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        Box::pin(async move { Ok(response) })
    }
}

/// Transport that answers every request with one fixed response.
pub struct StaticHttpClient {
    response: Result<HttpResponse, HttpError>,
}

impl StaticHttpClient {
    pub fn respond(status: u16, body: &str) -> Self {
        Self {
            response: Ok(HttpResponse::new(status, body)),
        }
    }

    pub fn fail(error: HttpError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl HttpClient for StaticHttpClient {
    fn execute<'a>(
        &'a self,
        _request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

pub fn config() -> ClientConfig {
    ClientConfig::new(API_KEY)
        .and_then(|config| config.with_base_url(BASE_URL))
        .expect("valid test config")
}

pub fn fake_client() -> (Arc<FakeIntrinio>, IntrinioClient) {
    let fake = Arc::new(FakeIntrinio::new());
    let client = IntrinioClient::with_http_client(config(), fake.clone());
    (fake, client)
}

pub fn static_client(http_client: StaticHttpClient) -> IntrinioClient {
    IntrinioClient::with_http_client(config(), Arc::new(http_client))
}

fn key(identifier: &str, tag: &str) -> (String, String) {
    (identifier.to_owned(), tag.to_owned())
}

fn error(status: u16, error: &str, message: &str) -> HttpResponse {
    HttpResponse::new(
        status,
        json!({ "error": error, "message": message }).to_string(),
    )
}
