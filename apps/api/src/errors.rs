use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    /// A failed read or write against the record store. `message` is what clients see.
    #[error("{message}: {source}")]
    Store {
        message: String,
        #[source]
        source: StoreError,
    },

    /// A collaborator other than the record store failed, e.g. the session store.
    #[error("{message}: {source}")]
    Dependency {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn store(message: impl Into<String>, source: StoreError) -> Self {
        AppError::Store {
            message: message.into(),
            source,
        }
    }
}

impl AppError {
    pub fn dependency(message: impl Into<String>, source: anyhow::Error) -> Self {
        AppError::Dependency {
            message: message.into(),
            source,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(source: StoreError) -> Self {
        AppError::store("A storage error occurred", source)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
            }
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
                None,
            ),
            AppError::Store { message, source } => {
                tracing::error!("Store error: {message}: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    message.clone(),
                    Some(source.to_string()),
                )
            }
            AppError::Dependency { message, source } => {
                tracing::error!("Dependency error: {message}: {source:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DEPENDENCY_ERROR",
                    message.clone(),
                    Some(format!("{source:#}")),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "success": false,
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = json!(details);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_is_400_with_error_field() {
        let (status, body) = body_json(AppError::Validation("userId missing".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "userId missing");
        assert_eq!(body["success"], false);
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_store_error_is_500_with_details() {
        let error = AppError::store(
            "Failed to seed interviews",
            StoreError::Unavailable("offline".to_string()),
        );
        let (status, body) = body_json(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to seed interviews");
        assert_eq!(body["code"], "STORE_ERROR");
        assert!(body["details"].as_str().unwrap().contains("offline"));
    }

    #[tokio::test]
    async fn test_dependency_error_keeps_message_and_details() {
        let error = AppError::dependency(
            "Failed to seed interviews",
            anyhow::anyhow!("connection refused"),
        );
        let (status, body) = body_json(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to seed interviews");
        assert_eq!(body["details"], "connection refused");
    }
}
