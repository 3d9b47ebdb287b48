// Centralized error handling for the console API

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Inline validation messages of a form, keyed by field name.
///
/// Only the first message recorded for a field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when no error was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Missing or invalid session token")]
    Unauthorized,

    #[error("Validation failed: {0}")]
    Validation(FormErrors),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("A query is already executing for this session")]
    QueryInProgress,

    #[error("Session is already closed: {0}")]
    SessionClosed(String),

    #[error("Invalid JSON body: {0}")]
    JsonBody(#[from] JsonRejection),

    #[error("Invalid path parameter: {0}")]
    PathParam(#[from] PathRejection),

    #[error("Invalid query string: {0}")]
    QueryString(#[from] QueryRejection),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<FormErrors> for ConsoleError {
    fn from(errors: FormErrors) -> Self {
        ConsoleError::Validation(errors)
    }
}

impl ConsoleError {
    pub fn status(&self) -> StatusCode {
        match self {
            ConsoleError::Unauthorized => StatusCode::UNAUTHORIZED,
            ConsoleError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ConsoleError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ConsoleError::NotFound(_) => StatusCode::NOT_FOUND,
            ConsoleError::QueryInProgress => StatusCode::CONFLICT,
            ConsoleError::SessionClosed(_) => StatusCode::CONFLICT,
            ConsoleError::JsonBody(rejection) => rejection.status(),
            ConsoleError::PathParam(rejection) => rejection.status(),
            ConsoleError::QueryString(rejection) => rejection.status(),
            ConsoleError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        use crate::models::admin::ErrorResponse;

        let status = self.status();
        let (error, errors) = match self {
            ConsoleError::Validation(errors) => ("Validation failed".to_string(), errors.into_map()),
            other => (other.to_string(), BTreeMap::new()),
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error,
                errors,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::admin::ErrorResponse;
    use axum::body::Body;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_form_errors_keep_first_message() {
        let mut errors = FormErrors::new();
        errors.add("port", "first");
        errors.add("port", "second");
        assert_eq!(errors.get("port"), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_form_errors_into_result() {
        assert_eq!(FormErrors::new().into_result(5).unwrap(), 5);
        assert!(FormErrors::single("a", "b").into_result(5).is_err());
    }

    #[test]
    fn test_form_errors_display() {
        let mut errors = FormErrors::new();
        errors.add("name", "Role name is required");
        errors.add("description", "Description is required");
        assert_eq!(
            errors.to_string(),
            "description: Description is required; name: Role name is required"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ConsoleError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ConsoleError::Validation(FormErrors::new()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ConsoleError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ConsoleError::QueryInProgress.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_validation_response_carries_field_errors() {
        let response =
            ConsoleError::from(FormErrors::single("name", "Role name is required")).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_of(response).await;
        assert!(!body.success);
        assert_eq!(body.error, "Validation failed");
        assert_eq!(body.errors.get("name").map(String::as_str), Some("Role name is required"));
    }

    #[tokio::test]
    async fn test_plain_error_response() {
        let body = body_of(ConsoleError::NotFound("User 9".into()).into_response()).await;
        assert_eq!(body.error, "Resource not found: User 9");
        assert!(body.errors.is_empty());
    }
}
