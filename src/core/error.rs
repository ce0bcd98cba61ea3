use crate::repositories::{CacheError, RemoteError};
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::collections::BTreeMap;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Field name -> validation messages
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
    fields: Option<FieldErrors>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
            fields: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_fields(mut self, fields: FieldErrors) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// 400 carrying per-field messages
    pub fn validation(fields: FieldErrors) -> Self {
        Self::bad_request("Validation error").with_fields(fields)
    }

    pub fn fields(&self) -> Option<&FieldErrors> {
        self.fields.as_ref()
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn forbidden(message: &'static str) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_gateway(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

impl From<CacheError> for AppError {
    fn from(err: CacheError) -> Self {
        Self::internal_server_error("Local cache unavailable").with_details(err.to_string())
    }
}

impl From<RemoteError> for AppError {
    fn from(err: RemoteError) -> Self {
        Self::bad_gateway("Remote guest list unavailable").with_details(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        collect_field_errors("", &err, &mut fields);
        Self::bad_request("Validation error")
            .with_details(err.to_string())
            .with_fields(fields)
    }
}

/// Flattens nested errors into keys like `additionalGuests[0].name`
pub fn collect_field_errors(prefix: &str, err: &ValidationErrors, fields: &mut FieldErrors) {
    for (field, kind) in err.errors() {
        let key = format!("{}{}", prefix, field);
        match kind {
            ValidationErrorsKind::Field(errors) => {
                fields
                    .entry(key)
                    .or_default()
                    .extend(errors.iter().map(error_message));
            }
            ValidationErrorsKind::Struct(inner) => {
                collect_field_errors(&format!("{}.", key), inner, fields);
            }
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(&format!("{}[{}].", key, index), inner, fields);
                }
            }
        }
    }
}

fn error_message(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.message,
            details: self.details,
            fields: self.fields,
        });
        (self.status, body).into_response()
    }
}
