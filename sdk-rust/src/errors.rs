use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single authorized request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-2xx status.
    #[error("Status error: {1} (Status {0})")]
    Status(StatusCode, String),
}

impl ClientError {
    /// The response status, when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(source) => source.status(),
            Self::Status(status, _) => Some(*status),
        }
    }

    /// Whether the failure means the credentials were rejected, as opposed to
    /// the request itself being broken or the server unreachable.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// The gateway operation that failed, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(verb)
    }
}

/// Classified failure of a gateway operation.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The resource does not exist. For the profile singleton this is the
    /// expected "not yet created" signal and callers must not treat it as an
    /// operational error; the singleton gateway already folds its GET case
    /// into [`Presence::NotYetCreated`](crate::Presence::NotYetCreated).
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Any other non-2xx response or transport failure.
    #[error("Failed to {operation} {resource}: {source}")]
    RequestFailed {
        operation: Operation,
        resource: &'static str,
        #[source]
        source: ClientError,
    },
}

impl GatewayError {
    /// Whether the underlying failure was a credential rejection.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::NotFound(_) => false,
            Self::RequestFailed { source, .. } => source.is_auth_failure(),
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure of the persisted credential store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Credential store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("Credential store encoding: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failure_covers_both_auth_statuses() {
        let unauthorized = ClientError::Status(StatusCode::UNAUTHORIZED, String::new());
        let forbidden = ClientError::Status(StatusCode::FORBIDDEN, String::new());
        let server = ClientError::Status(StatusCode::INTERNAL_SERVER_ERROR, String::new());

        assert!(unauthorized.is_auth_failure());
        assert!(forbidden.is_auth_failure());
        assert!(!server.is_auth_failure());
    }

    #[test]
    fn gateway_error_mentions_operation_and_resource() {
        let err = GatewayError::RequestFailed {
            operation: Operation::Update,
            resource: "experience",
            source: ClientError::Status(StatusCode::BAD_REQUEST, "bad payload".into()),
        };
        let message = err.to_string();
        assert!(message.contains("update"));
        assert!(message.contains("experience"));
    }
}
