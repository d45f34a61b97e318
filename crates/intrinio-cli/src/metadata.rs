use serde::Serialize;
use uuid::Uuid;

/// Request identifier (UUID v4) attached to every CLI invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Metadata block of the output envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub request_id: RequestId,
    pub latency_ms: u64,
    /// Remote calls made for this command.
    pub requests: u32,
}

impl Metadata {
    pub fn new(latency_ms: u64, requests: u32) -> Self {
        Self {
            request_id: RequestId::new_v4(),
            latency_ms,
            requests,
        }
    }
}

/// JSON document printed by every command.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub meta: Metadata,
    pub data: T,
}
