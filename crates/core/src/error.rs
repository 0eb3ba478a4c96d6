//! API error model.

use http::StatusCode;
use http::header::{HeaderMap, HeaderName, HeaderValue, WWW_AUTHENTICATE};
use serde_json::{Map, Value};
use thiserror::Error;

/// Result type used across the domain layer and HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Closed catalog of error variants.
///
/// Each variant is a pure data definition: its status, machine-readable code
/// and default detail live in the accessors below, never in shared mutable
/// state. Constructed errors own their fields, so customizing one error can
/// not leak into the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A requested resource does not exist.
    NotFound,
    /// A uniqueness rule was violated.
    AlreadyExists,
    /// Input was well-formed but failed validation rules.
    InvalidData,
    /// Credentials are missing or invalid.
    Unauthorized,
    /// Authenticated but not allowed.
    Forbidden,
    /// The request itself is malformed.
    BadRequest,
    /// Unclassified server-side failure.
    Internal,
}

impl ErrorKind {
    /// Every declared variant, for exhaustive checks.
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::NotFound,
        ErrorKind::AlreadyExists,
        ErrorKind::InvalidData,
        ErrorKind::Unauthorized,
        ErrorKind::Forbidden,
        ErrorKind::BadRequest,
        ErrorKind::Internal,
    ];

    pub const fn status(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::AlreadyExists => StatusCode::CONFLICT,
            ErrorKind::InvalidData => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn error_code(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::InvalidData => "invalid_data",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::Internal => "internal_error",
        }
    }

    pub const fn default_detail(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "Book not found",
            ErrorKind::AlreadyExists => "Book already exists",
            ErrorKind::InvalidData => "Invalid book data",
            ErrorKind::Unauthorized => "Authentication required",
            ErrorKind::Forbidden => "You don't have permission to access this resource",
            ErrorKind::BadRequest => "Bad request",
            ErrorKind::Internal => "Internal server error",
        }
    }

    /// Fixed response headers the variant always carries, if any.
    fn challenge(self) -> Option<(HeaderName, HeaderValue)> {
        match self {
            ErrorKind::Unauthorized => {
                Some((WWW_AUTHENTICATE, HeaderValue::from_static("Bearer")))
            }
            _ => None,
        }
    }
}

/// Error value carried from domain code to the HTTP boundary.
///
/// Status and detail are always resolved at construction time; the code,
/// headers and data are optional and omitted from the wire body when empty.
/// Construction cannot fail: statuses and headers are typed, so an invalid
/// one is unrepresentable here rather than rejected at serialization time.
#[derive(Debug, Clone, Error)]
#[error("{detail}")]
pub struct ApiError {
    status: StatusCode,
    detail: String,
    error_code: Option<String>,
    headers: HeaderMap,
    data: Map<String, Value>,
}

impl Default for ApiError {
    /// The uncustomized base error: 500 with a generic message and no code,
    /// headers or data.
    fn default() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: "Internal server error".to_string(),
            error_code: None,
            headers: HeaderMap::new(),
            data: Map::new(),
        }
    }
}

impl ApiError {
    /// Construct a catalog variant with its default status, detail and code.
    pub fn new(kind: ErrorKind) -> Self {
        let mut headers = HeaderMap::new();
        if let Some((name, value)) = kind.challenge() {
            headers.insert(name, value);
        }
        Self {
            status: kind.status(),
            detail: kind.default_detail().to_string(),
            error_code: Some(kind.error_code().to_string()),
            headers,
            data: Map::new(),
        }
    }

    /// Not-found for a specific book, with the id in the message.
    pub fn not_found(book_id: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::NotFound).with_detail(format!("Book with ID {book_id} not found"))
    }

    /// Uniqueness conflict for a title, with the title in the message.
    pub fn already_exists(title: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::AlreadyExists)
            .with_detail(format!("Book with title '{title}' already exists"))
    }

    /// Validation failure carrying per-field violations in the payload under
    /// `validation_errors`.
    pub fn invalid_data<K, V>(violations: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let fields: Map<String, Value> = violations
            .into_iter()
            .map(|(field, violation)| (field.into(), violation.into()))
            .collect();
        Self::new(ErrorKind::InvalidData).with_data("validation_errors", fields)
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorKind::Unauthorized)
    }

    pub fn forbidden() -> Self {
        Self::new(ErrorKind::Forbidden)
    }

    pub fn bad_request() -> Self {
        Self::new(ErrorKind::BadRequest)
    }

    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal)
    }

    /// Replace the detail message. Explicit text wins over any formatted
    /// default; it is never appended to it.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }

    /// Attach one response header. Headers set earlier (including a variant's
    /// fixed ones) survive unless the same name is given again.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merge one key into the structured payload.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Wire body for this error.
    ///
    /// `detail` is always present; `error_code` and `data` are omitted when
    /// empty, so clients can key on their presence.
    pub fn to_body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("detail".to_string(), Value::String(self.detail.clone()));
        if let Some(code) = &self.error_code {
            if !code.is_empty() {
                body.insert("error_code".to_string(), Value::String(code.clone()));
            }
        }
        if !self.data.is_empty() {
            body.insert("data".to_string(), Value::Object(self.data.clone()));
        }
        body
    }
}

/// Unclassified failures surface as the internal variant. The wrapped error's
/// text stays server-side and never reaches a client body.
impl From<anyhow::Error> for ApiError {
    fn from(_err: anyhow::Error) -> Self {
        Self::internal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_defaults_serialize_to_detail_and_code_only() {
        for kind in ErrorKind::ALL {
            let body = ApiError::new(kind).to_body();
            assert_eq!(
                body.get("detail"),
                Some(&Value::String(kind.default_detail().to_string()))
            );
            assert_eq!(
                body.get("error_code"),
                Some(&Value::String(kind.error_code().to_string()))
            );
            assert!(
                !body.contains_key("data"),
                "{kind:?} must not carry data by default"
            );
        }
    }

    #[test]
    fn base_error_defaults_to_500_without_a_code() {
        let err = ApiError::default();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "Internal server error");
        let body = err.to_body();
        assert!(!body.contains_key("error_code"));
        assert!(!body.contains_key("data"));
    }

    #[test]
    fn not_found_formats_the_identifier() {
        let err = ApiError::not_found(42);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "Book with ID 42 not found");
        assert_eq!(err.error_code(), Some("not_found"));
    }

    #[test]
    fn already_exists_formats_the_title() {
        let err = ApiError::already_exists("1984");
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.detail(), "Book with title '1984' already exists");
    }

    #[test]
    fn explicit_detail_replaces_the_formatted_default() {
        let err = ApiError::not_found(42).with_detail("gone");
        assert_eq!(err.detail(), "gone");
    }

    #[test]
    fn invalid_data_carries_field_violations() {
        let err = ApiError::invalid_data([("title", "too short")]);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = err.to_body();
        assert_eq!(
            body["data"]["validation_errors"]["title"],
            Value::String("too short".to_string())
        );
    }

    #[test]
    fn unauthorized_carries_the_challenge_header() {
        let err = ApiError::unauthorized();
        assert_eq!(
            err.headers().get(WWW_AUTHENTICATE),
            Some(&HeaderValue::from_static("Bearer"))
        );
    }

    #[test]
    fn challenge_header_survives_other_overrides() {
        let err = ApiError::unauthorized()
            .with_detail("token expired")
            .with_status(StatusCode::FORBIDDEN)
            .with_error_code("token_expired");
        assert_eq!(
            err.headers().get(WWW_AUTHENTICATE),
            Some(&HeaderValue::from_static("Bearer"))
        );
    }

    #[test]
    fn empty_error_code_is_omitted_from_the_body() {
        let err = ApiError::bad_request().with_error_code("");
        assert!(!err.to_body().contains_key("error_code"));
    }

    #[test]
    fn serialization_is_pure_and_repeatable() {
        let err = ApiError::invalid_data([("author", "Author cannot be empty")])
            .with_detail("Author validation failed");
        assert_eq!(err.to_body(), err.to_body());
    }

    #[test]
    fn overrides_compose_on_the_base_error() {
        let err = ApiError::default()
            .with_status(StatusCode::IM_A_TEAPOT)
            .with_detail("I'm a teapot")
            .with_error_code("TEAPOT")
            .with_data("info", "refuses to brew coffee");
        assert_eq!(err.status(), StatusCode::IM_A_TEAPOT);
        let body = err.to_body();
        assert_eq!(body["error_code"], Value::String("TEAPOT".to_string()));
        assert_eq!(
            body["data"]["info"],
            Value::String("refuses to brew coffee".to_string())
        );
    }

    #[test]
    fn unclassified_failures_wrap_as_internal() {
        let err = ApiError::from(anyhow::anyhow!("connection pool exhausted"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), Some("internal_error"));
        assert!(!err.detail().contains("connection pool"));
    }

    #[test]
    fn display_matches_the_detail() {
        let err = ApiError::not_found(7);
        assert_eq!(err.to_string(), "Book with ID 7 not found");
    }
}
