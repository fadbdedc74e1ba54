use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;
use thiserror::Error as ThisError;

/// Provider call that produced an error; its `Display` is the failure prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    ListDatabases,
    CreateDatabase,
    CreateConnection,
}

impl ApiOperation {
    pub fn failure_message(self) -> &'static str {
        match self {
            ApiOperation::ListDatabases => "Failed to fetch databases",
            ApiOperation::CreateDatabase => "Failed to create database",
            ApiOperation::CreateConnection => "Failed to create connection string",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

#[derive(Debug, ThisError)]
pub enum ProvisionError {
    /// Required input missing or unusable. Raised before any request is sent.
    #[error("{0}")]
    Config(String),

    /// Provider answered with a non-2xx status.
    ///
    /// `StatusCode` renders as `<code> <reason>`, so the message reads
    /// `Failed to create database: 500 Internal Server Error - <body>`.
    #[error("{operation}: {status} - {body}")]
    Api {
        operation: ApiOperation,
        status: StatusCode,
        body: String,
    },

    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// 2xx response whose body did not have the expected shape.
    #[error("{operation}: unexpected response body: {reason}")]
    InvalidResponse {
        operation: ApiOperation,
        reason: String,
    },

    #[error("Provisioning did not finish within {0:?}")]
    DeadlineExceeded(Duration),
}

impl ProvisionError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ProvisionError::Api { status, .. } => Some(*status),
            ProvisionError::Network(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_carries_status_reason_and_body() {
        let err = ProvisionError::Api {
            operation: ApiOperation::CreateDatabase,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Failed to create database: 500 Internal Server Error - boom"
        );
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn list_failure_uses_fetch_prefix() {
        let err = ProvisionError::Api {
            operation: ApiOperation::ListDatabases,
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"error":"invalid token"}"#.to_string(),
        };

        let message = err.to_string();
        assert!(message.starts_with("Failed to fetch databases: 401 Unauthorized"));
        assert!(message.ends_with(r#"{"error":"invalid token"}"#));
    }

    #[test]
    fn config_error_is_reported_verbatim() {
        let err = ProvisionError::Config("service_token and project_id are required".into());
        assert_eq!(err.to_string(), "service_token and project_id are required");
        assert_eq!(err.status(), None);
    }
}
