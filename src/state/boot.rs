use crate::model::ConnectionStatus;
use crate::services::ResponseLogger;

/// What the shell shows before, or instead of, the proposal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootState {
    Loading,
    /// Connection check failed; the proposal is never shown.
    Failed(String),
    Ready,
}

impl From<ConnectionStatus> for BootState {
    fn from(status: ConnectionStatus) -> Self {
        match status {
            ConnectionStatus::Connected | ConnectionStatus::LocalOnly => BootState::Ready,
            ConnectionStatus::Failed(reason) if reason.trim().is_empty() => {
                BootState::Failed("Failed to connect to services.".to_string())
            }
            ConnectionStatus::Failed(reason) => BootState::Failed(reason),
        }
    }
}

pub async fn boot(logger: &dyn ResponseLogger) -> BootState {
    let status = logger.check_connection().await;
    if !status.is_ready() {
        log::error!("initialization error: {status:?}");
    }
    BootState::from(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::StubLogger;
    use futures::executor::block_on;

    #[test]
    fn connected_is_ready() {
        let logger = StubLogger::succeeding();
        assert_eq!(block_on(boot(&logger)), BootState::Ready);
    }

    #[test]
    fn local_only_is_ready() {
        let logger = StubLogger::succeeding().with_status(ConnectionStatus::LocalOnly);
        assert_eq!(block_on(boot(&logger)), BootState::Ready);
    }

    #[test]
    fn failure_blocks_the_proposal() {
        let logger = StubLogger::succeeding().with_status(ConnectionStatus::Failed("HTTP 404: Not Found".into()));
        assert_eq!(block_on(boot(&logger)), BootState::Failed("HTTP 404: Not Found".into()));
    }

    #[test]
    fn blank_failure_gets_a_message() {
        let state = BootState::from(ConnectionStatus::Failed(String::new()));
        assert_eq!(state, BootState::Failed("Failed to connect to services.".into()));
    }

    #[test]
    fn boot_never_records() {
        let logger = StubLogger::succeeding();
        block_on(boot(&logger));
        assert!(logger.calls().is_empty());
    }
}
