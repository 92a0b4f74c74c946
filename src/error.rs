use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Longest upstream error body carried into a message.
const MAX_BODY_IN_MESSAGE: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    RateLimit,
    Auth,
    Connection,
    Server,
    BadRequest,
    Malformed,
    Cancelled,
}

impl ErrorKind {
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::RateLimit | ErrorKind::Connection | ErrorKind::Server)
    }
}

/// Failure talking to the text or image model.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("Rate limited by upstream: {0}")]
    RateLimited(String),
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Upstream server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("Bad request ({status}): {message}")]
    BadRequest { status: u16, message: String },
    #[error("Malformed upstream response: {0}")]
    Malformed(String),
    #[error("Request cancelled")]
    Cancelled,
}

fn clip(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() <= MAX_BODY_IN_MESSAGE {
        return body.to_string();
    }
    let head: String = body.chars().take(MAX_BODY_IN_MESSAGE).collect();
    format!("{head}...")
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::RateLimited(_) => ErrorKind::RateLimit,
            ClientError::Auth(_) => ErrorKind::Auth,
            ClientError::Connection(_) => ErrorKind::Connection,
            ClientError::Server { .. } => ErrorKind::Server,
            ClientError::BadRequest { .. } => ErrorKind::BadRequest,
            ClientError::Malformed(_) => ErrorKind::Malformed,
            ClientError::Cancelled => ErrorKind::Cancelled,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }

    /// Classifies a non-success HTTP status from an upstream API.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = clip(body);
        match status.as_u16() {
            429 => ClientError::RateLimited(message),
            401 | 403 => ClientError::Auth(message),
            s if status.is_server_error() => ClientError::Server { status: s, message },
            s => ClientError::BadRequest { status: s, message },
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return ClientError::from_status(status, &e.to_string());
        }
        if e.is_decode() {
            return ClientError::Malformed(e.to_string());
        }
        ClientError::Connection(e.to_string())
    }
}

/// Error surfaced by a route handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No content provided")]
    NoContent,
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Export failed: {0}")]
    Export(String),
    #[error(transparent)]
    Upstream(#[from] ClientError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoContent | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(e) => match e.kind() {
                ErrorKind::RateLimit => StatusCode::TOO_MANY_REQUESTS,
                ErrorKind::Auth => StatusCode::UNAUTHORIZED,
                ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
                ErrorKind::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
                ErrorKind::Connection | ErrorKind::Server | ErrorKind::Malformed => StatusCode::BAD_GATEWAY,
            },
        }
    }

    pub fn retryable(&self) -> bool {
        matches!(self, AppError::Upstream(e) if e.is_retryable())
    }

    fn kind_str(&self) -> &'static str {
        match self {
            AppError::NoContent => "no_content",
            AppError::Validation(_) => "validation",
            AppError::NotFound(_) => "not_found",
            AppError::Export(_) => "export",
            AppError::Upstream(e) => match e.kind() {
                ErrorKind::RateLimit => "rate_limit",
                ErrorKind::Auth => "auth",
                ErrorKind::Connection => "connection",
                ErrorKind::Server => "server",
                ErrorKind::BadRequest => "bad_request",
                ErrorKind::Malformed => "malformed",
                ErrorKind::Cancelled => "cancelled",
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.kind_str(), error = %self, "Request failed");
        } else {
            tracing::warn!(kind = self.kind_str(), error = %self, "Request rejected");
        }
        let body = json!({
            "success": false,
            "error": self.to_string(),
            "kind": self.kind_str(),
            "retryable": self.retryable(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn statuses_are_classified() {
        assert_eq!(ClientError::from_status(StatusCode::TOO_MANY_REQUESTS, "slow down").kind(), ErrorKind::RateLimit);
        assert_eq!(ClientError::from_status(StatusCode::UNAUTHORIZED, "").kind(), ErrorKind::Auth);
        assert_eq!(ClientError::from_status(StatusCode::FORBIDDEN, "").kind(), ErrorKind::Auth);
        assert_eq!(ClientError::from_status(StatusCode::BAD_GATEWAY, "").kind(), ErrorKind::Server);
        assert_eq!(ClientError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "").kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn retry_eligibility_by_kind() {
        assert!(ErrorKind::RateLimit.is_retryable());
        assert!(ErrorKind::Connection.is_retryable());
        assert!(ErrorKind::Server.is_retryable());
        assert!(!ErrorKind::Auth.is_retryable());
        assert!(!ErrorKind::BadRequest.is_retryable());
        assert!(!ErrorKind::Malformed.is_retryable());
        assert!(!ErrorKind::Cancelled.is_retryable());
    }

    #[test]
    fn long_bodies_are_clipped() {
        let e = ClientError::from_status(StatusCode::BAD_REQUEST, &"x".repeat(1000));
        let ClientError::BadRequest { status, message } = e else { panic!("expected bad request") };
        assert_eq!(status, 400);
        assert_eq!(message.chars().count(), MAX_BODY_IN_MESSAGE + 3);
    }

    #[tokio::test]
    async fn app_error_renders_json_body() {
        let resp = AppError::Upstream(ClientError::RateLimited("quota".into())).into_response();
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["retryable"], true);
        assert_eq!(body["kind"], "rate_limit");

        let resp = AppError::NoContent.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
