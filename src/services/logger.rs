//! The response-logging contract and the client the app constructs at boot.

use async_trait::async_trait;

use super::config::FirebaseConfig;
use super::realtime_db::RealtimeDbLogger;
use crate::model::{Classification, ConnectionStatus};
use crate::util;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Best-effort sink for proposal responses.
///
/// Neither call is required to succeed for the UI to move on; callers absorb
/// `record` failures and only surface a `ConnectionStatus::Failed` from boot.
#[async_trait(?Send)]
pub trait ResponseLogger {
    async fn check_connection(&self) -> ConnectionStatus;

    async fn record(&self, classification: Classification, evasion_count: u32) -> Result<(), LoggerError>;
}

/// Delay that makes local-only submissions feel like a network round trip.
pub const LOCAL_ONLY_DELAY_MS: i32 = 600;

/// Used when no datastore is configured. Responses only reach the console.
#[derive(Clone, Debug)]
pub struct LocalOnlyLogger {
    delay_ms: i32,
}

impl LocalOnlyLogger {
    pub fn new() -> Self {
        Self {
            delay_ms: LOCAL_ONLY_DELAY_MS,
        }
    }

    #[cfg(test)]
    pub fn without_delay() -> Self {
        Self { delay_ms: 0 }
    }
}

#[async_trait(?Send)]
impl ResponseLogger for LocalOnlyLogger {
    async fn check_connection(&self) -> ConnectionStatus {
        log::warn!("datastore configuration missing (API key or database URL); running local-only, responses will not be saved");
        ConnectionStatus::LocalOnly
    }

    async fn record(&self, classification: Classification, evasion_count: u32) -> Result<(), LoggerError> {
        log::info!("[local-only] recording response: {classification}, moves: {evasion_count}");
        if self.delay_ms > 0 {
            util::sleep_ms(self.delay_ms).await;
        }
        Ok(())
    }
}

/// The client chosen from configuration at startup and injected into the views.
#[derive(Clone, Debug)]
pub enum ResponseClient {
    LocalOnly(LocalOnlyLogger),
    Remote(RealtimeDbLogger),
}

impl ResponseClient {
    pub fn from_config(config: &FirebaseConfig) -> Self {
        match config.database_url() {
            Some(url) if config.is_configured() => ResponseClient::Remote(RealtimeDbLogger::new(url)),
            _ => ResponseClient::LocalOnly(LocalOnlyLogger::new()),
        }
    }

    pub fn is_local_only(&self) -> bool {
        matches!(self, ResponseClient::LocalOnly(_))
    }
}

#[async_trait(?Send)]
impl ResponseLogger for ResponseClient {
    async fn check_connection(&self) -> ConnectionStatus {
        match self {
            ResponseClient::LocalOnly(l) => l.check_connection().await,
            ResponseClient::Remote(r) => r.check_connection().await,
        }
    }

    async fn record(&self, classification: Classification, evasion_count: u32) -> Result<(), LoggerError> {
        match self {
            ResponseClient::LocalOnly(l) => l.record(classification, evasion_count).await,
            ResponseClient::Remote(r) => r.record(classification, evasion_count).await,
        }
    }
}
