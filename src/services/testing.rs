use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::logger::{LoggerError, ResponseLogger};
use crate::model::{Classification, ConnectionStatus};

/// Records every call; optionally fails and samples outside state mid-call.
pub struct StubLogger {
    fail: bool,
    status: ConnectionStatus,
    calls: RefCell<Vec<(Classification, u32)>>,
    observer: Option<Box<dyn Fn() -> bool>>,
    observed: RefCell<Vec<bool>>,
}

impl StubLogger {
    pub fn succeeding() -> Self {
        Self {
            fail: false,
            status: ConnectionStatus::Connected,
            calls: RefCell::new(Vec::new()),
            observer: None,
            observed: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::succeeding()
        }
    }

    pub fn with_status(mut self, status: ConnectionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn observing(mut self, f: impl Fn() -> bool + 'static) -> Self {
        self.observer = Some(Box::new(f));
        self
    }

    pub fn calls(&self) -> Vec<(Classification, u32)> {
        self.calls.borrow().clone()
    }

    pub fn observed(&self) -> Vec<bool> {
        self.observed.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ResponseLogger for StubLogger {
    async fn check_connection(&self) -> ConnectionStatus {
        self.status.clone()
    }

    async fn record(&self, classification: Classification, evasion_count: u32) -> Result<(), LoggerError> {
        self.calls.borrow_mut().push((classification, evasion_count));
        if let Some(f) = &self.observer {
            self.observed.borrow_mut().push(f());
        }
        if self.fail {
            Err(LoggerError::Request("stub rejected".into()))
        } else {
            Ok(())
        }
    }
}

/// `record` never resolves; for exercising dropped submissions.
#[derive(Default)]
pub struct PendingLogger {
    calls: Cell<usize>,
}

impl PendingLogger {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl ResponseLogger for PendingLogger {
    async fn check_connection(&self) -> ConnectionStatus {
        ConnectionStatus::Connected
    }

    async fn record(&self, _classification: Classification, _evasion_count: u32) -> Result<(), LoggerError> {
        self.calls.set(self.calls.get() + 1);
        futures::future::pending::<()>().await;
        Ok(())
    }
}
