//! Axum extractors
//!
//! [`JsonBody<T>`] is a lenient JSON extractor: an empty request body yields
//! `T::default()` instead of a rejection, so a request with no body reaches
//! the manager and fails its required-field check like any other incomplete
//! payload. The `Content-Type` header is not required.

use crate::core::error::BizError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON request body, defaulted when the body is empty
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_company(
///     State(manager): State<CompanyManager>,
///     JsonBody(payload): JsonBody<CompanyPayload>,
/// ) -> Result<impl IntoResponse, BizError> {
///     // payload fields are all `Option`s
/// }
/// ```
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T>
where
    T: DeserializeOwned + Default,
{
    /// Parse raw body bytes
    pub fn parse(bytes: &[u8]) -> Result<Self, BizError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }
        Ok(JsonBody(serde_json::from_slice(bytes)?))
    }
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = BizError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| BizError::validation(format!("Invalid request body: {}", e.body_text())))?;

        Self::parse(&bytes)
    }
}
