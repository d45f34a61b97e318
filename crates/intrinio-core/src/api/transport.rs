use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::RemoteApiError;
use crate::http_client::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};

/// Configuration plus a shared transport; cloned into every accessor.
#[derive(Clone)]
pub struct ApiTransport {
    config: Arc<ClientConfig>,
    http_client: Arc<dyn HttpClient>,
}

impl ApiTransport {
    pub fn new(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config: Arc::new(config),
            http_client,
        }
    }

    /// Transport backed by a pooled reqwest client.
    pub fn with_reqwest(config: ClientConfig) -> Self {
        Self::new(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the request for `base/seg1/seg2/...`, each segment percent-encoded.
    pub(crate) fn request(
        &self,
        segments: &[&str],
        query: Vec<(&'static str, String)>,
    ) -> HttpRequest {
        let path = encode_path(segments);
        let mut request = HttpRequest::get(format!("{}{path}", self.config.base_url()))
            .with_header("accept", "application/json")
            .with_header("user-agent", self.config.user_agent())
            .with_timeout_ms(self.config.timeout_ms());

        for (name, value) in query {
            request = request.with_query(name, value);
        }

        request.with_auth(self.config.auth())
    }

    /// Executes a GET and returns the response only when its status is 2xx.
    pub(crate) async fn get(
        &self,
        segments: &[&str],
        query: Vec<(&'static str, String)>,
    ) -> Result<HttpResponse, RemoteApiError> {
        let request = self.request(segments, query);
        let path = encode_path(segments);
        let started = Instant::now();

        let response = self.http_client.execute(request).await.map_err(|error| {
            warn!(path = %path, kind = ?error.kind(), "intrinio transport error");
            RemoteApiError::transport(format!("intrinio transport error: {}", error.message()))
        })?;

        let latency_ms = started.elapsed().as_millis() as u64;
        if !response.is_success() {
            warn!(
                path = %path,
                status = response.status,
                latency_ms,
                "intrinio returned error status"
            );
            return Err(RemoteApiError::from_response(response.status, response.body));
        }

        debug!(path = %path, status = response.status, latency_ms, "intrinio request completed");
        Ok(response)
    }
}

fn encode_path(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|segment| format!("/{}", urlencoding::encode(segment)))
        .collect()
}
