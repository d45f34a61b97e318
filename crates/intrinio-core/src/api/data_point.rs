use std::str::FromStr;

use rust_decimal::Decimal;

use crate::api::{ApiFuture, ApiTransport, DataPointApi};
use crate::error::RemoteApiError;
use crate::http_client::HttpResponse;
use crate::{Identifier, Tag};

/// Data Point API accessor.
#[derive(Clone)]
pub struct DataPointClient {
    transport: ApiTransport,
}

impl DataPointClient {
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    async fn fetch_number(
        &self,
        identifier: &Identifier,
        tag: &Tag,
    ) -> Result<Decimal, RemoteApiError> {
        let response = self
            .transport
            .get(
                &["data_point", identifier.as_str(), tag.as_str(), "number"],
                Vec::new(),
            )
            .await?;
        parse_number(&response)
    }

    async fn fetch_text(
        &self,
        identifier: &Identifier,
        tag: &Tag,
    ) -> Result<String, RemoteApiError> {
        let response = self
            .transport
            .get(
                &["data_point", identifier.as_str(), tag.as_str(), "text"],
                Vec::new(),
            )
            .await?;
        parse_text(&response)
    }
}

impl DataPointApi for DataPointClient {
    fn get_number<'a>(
        &'a self,
        identifier: &'a Identifier,
        tag: &'a Tag,
    ) -> ApiFuture<'a, Decimal> {
        Box::pin(self.fetch_number(identifier, tag))
    }

    fn get_text<'a>(&'a self, identifier: &'a Identifier, tag: &'a Tag) -> ApiFuture<'a, String> {
        Box::pin(self.fetch_text(identifier, tag))
    }
}

/// Accepts `217.5`, `"217.5"` or `1.2E+9`; everything else is an error.
pub(crate) fn parse_number(response: &HttpResponse) -> Result<Decimal, RemoteApiError> {
    let trimmed = response.body.trim();
    if trimmed.is_empty() {
        return Err(RemoteApiError::unexpected_body(
            response.status,
            response.body.as_str(),
            "empty body where a number was expected",
        ));
    }

    // Unquoted literals are parsed directly to keep full decimal precision.
    let literal = if trimmed.starts_with('"') {
        serde_json::from_str::<String>(trimmed).map_err(|e| {
            RemoteApiError::unexpected_body(response.status, response.body.as_str(), e.to_string())
        })?
    } else {
        trimmed.to_owned()
    };
    let literal = literal.trim();

    Decimal::from_str(literal)
        .or_else(|_| {
            Decimal::from_scientific(&literal.replace("E+", "E").replace("e+", "e"))
        })
        .map_err(|_| {
            RemoteApiError::unexpected_body(
                response.status,
                response.body.as_str(),
                format!("'{literal}' is not a decimal number"),
            )
        })
}

/// Accepts a JSON string or bare text. `null`, empty bodies and JSON
/// objects or arrays are errors.
pub(crate) fn parse_text(response: &HttpResponse) -> Result<String, RemoteApiError> {
    let trimmed = response.body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(RemoteApiError::unexpected_body(
            response.status,
            response.body.as_str(),
            "no text value in body",
        ));
    }

    if trimmed.starts_with('"') {
        return serde_json::from_str::<String>(trimmed).map_err(|e| {
            RemoteApiError::unexpected_body(response.status, response.body.as_str(), e.to_string())
        });
    }

    let structured = (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<serde_json::Value>(trimmed).is_ok();
    if structured {
        return Err(RemoteApiError::unexpected_body(
            response.status,
            response.body.as_str(),
            "JSON object or array where text was expected",
        ));
    }

    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_quoted_and_scientific_numbers() {
        let cases = [
            ("217.5", Decimal::new(2175, 1)),
            ("\"217.5\"\n", Decimal::new(2175, 1)),
            ("-0.0031", Decimal::new(-31, 4)),
            ("1.2E+3", Decimal::new(1200, 0)),
            ("2239826000000", Decimal::new(2_239_826_000_000, 0)),
        ];

        for (body, expected) in cases {
            let value = parse_number(&HttpResponse::ok_json(body)).expect(body);
            assert_eq!(value, expected, "{body}");
        }
    }

    #[test]
    fn keeps_precision_beyond_f64() {
        let value = parse_number(&HttpResponse::ok_json("0.12345678901234567890"))
            .expect("must parse");
        assert_eq!(value.to_string(), "0.12345678901234567890");
    }

    #[test]
    fn non_numeric_success_bodies_are_errors_not_nulls() {
        for body in ["null", "\"na\"", "{}", "", "nm"] {
            let error = parse_number(&HttpResponse::ok_json(body)).expect_err(body);
            assert_eq!(error.status_code(), 200);
            assert_eq!(error.raw_body(), Some(body));
        }
    }

    #[test]
    fn parses_text_bodies() {
        assert_eq!(
            parse_text(&HttpResponse::ok_json("\"Apple Inc.\"")).expect("json string"),
            "Apple Inc."
        );
        assert_eq!(
            parse_text(&HttpResponse::ok_json("Apple Inc.\n")).expect("bare text"),
            "Apple Inc."
        );
        assert!(parse_text(&HttpResponse::ok_json("null")).is_err());
        assert!(parse_text(&HttpResponse::ok_json("  ")).is_err());
    }

    #[test]
    fn structured_json_is_not_text() {
        for body in [r#"{"message":"maintenance"}"#, "[1,2]", "{}"] {
            let error = parse_text(&HttpResponse::ok_json(body)).expect_err(body);
            assert_eq!(error.status_code(), 200);
            assert_eq!(error.raw_body(), Some(body));
            assert!(error.message().starts_with("unexpected response body"));
        }
    }
}
