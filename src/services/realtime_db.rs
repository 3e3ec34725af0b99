//! Firebase Realtime Database over its REST API.
//!
//! Records are pushed to a single list; the database assigns the keys.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::logger::{LoggerError, ResponseLogger};
use crate::model::{Classification, ConnectionStatus, ResponseRecord};
use crate::util;

/// List that every response is pushed onto.
pub const RESPONSES_PATH: &str = "date_responses";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RealtimeDbLogger {
    database_url: String,
}

impl RealtimeDbLogger {
    pub fn new(database_url: &str) -> Self {
        Self {
            database_url: database_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{RESPONSES_PATH}.json", self.database_url)
    }

    fn probe_url(&self) -> String {
        format!("{}?shallow=true", self.collection_url())
    }

    fn validate(&self) -> Result<(), LoggerError> {
        match self.database_url.strip_prefix("https://") {
            Some(host) if !host.is_empty() => Ok(()),
            _ => Err(LoggerError::InvalidConfig(format!(
                "database URL must start with https:// (got {:?})",
                self.database_url
            ))),
        }
    }

    async fn probe(&self) -> Result<(), LoggerError> {
        self.validate()?;
        let resp = send("GET", &self.probe_url(), None).await?;
        ensure_ok(&resp)
    }

    async fn push(&self, record: &ResponseRecord) -> Result<(), LoggerError> {
        let body = serde_json::to_string(record)?;
        let resp = send("POST", &self.collection_url(), Some(&body)).await?;
        ensure_ok(&resp)
    }
}

#[async_trait(?Send)]
impl ResponseLogger for RealtimeDbLogger {
    async fn check_connection(&self) -> ConnectionStatus {
        match self.probe().await {
            Ok(()) => {
                log::info!("connected to realtime database at {}", self.database_url);
                ConnectionStatus::Connected
            }
            Err(err) => {
                log::error!("datastore connection check failed: {err}");
                ConnectionStatus::Failed(err.to_string())
            }
        }
    }

    async fn record(&self, classification: Classification, evasion_count: u32) -> Result<(), LoggerError> {
        self.validate()?;
        let record = ResponseRecord::new(classification, evasion_count, util::now_iso(), util::user_agent());
        self.push(&record).await
    }
}

#[allow(clippy::future_not_send)]
async fn send(method: &str, url: &str, body: Option<&str>) -> Result<Response, LoggerError> {
    let request_err = |e: JsValue| LoggerError::Request(util::js_error_message(&e));

    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(body));
    }
    let request = Request::new_with_str_and_init(url, &init).map_err(request_err)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(request_err)?;
    }

    let window = util::window().ok_or_else(|| LoggerError::Request("no browser window".into()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(request_err)?;
    value.dyn_into::<Response>().map_err(request_err)
}

fn ensure_ok(resp: &Response) -> Result<(), LoggerError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(LoggerError::Status {
            status: resp.status(),
            status_text: resp.status_text(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn collection_url_strips_trailing_slash() {
        let db = RealtimeDbLogger::new(" https://demo-default-rtdb.firebaseio.com/ ");
        assert_eq!(
            db.collection_url(),
            "https://demo-default-rtdb.firebaseio.com/date_responses.json"
        );
        assert_eq!(
            db.probe_url(),
            "https://demo-default-rtdb.firebaseio.com/date_responses.json?shallow=true"
        );
    }

    #[test]
    fn rejects_non_https_urls() {
        assert!(RealtimeDbLogger::new("http://insecure.example").validate().is_err());
        assert!(RealtimeDbLogger::new("https://").validate().is_err());
        assert!(RealtimeDbLogger::new("demo.firebaseio.com").validate().is_err());
        assert!(RealtimeDbLogger::new("https://demo.firebaseio.com").validate().is_ok());
    }

    #[test]
    fn invalid_url_fails_connection_check() {
        let db = RealtimeDbLogger::new("ftp://nope");
        match block_on(db.check_connection()) {
            ConnectionStatus::Failed(reason) => assert!(reason.contains("https://")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn invalid_url_rejects_record() {
        let db = RealtimeDbLogger::new("");
        let err = block_on(db.record(Classification::Accept, 1)).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfig(_)));
    }
}
