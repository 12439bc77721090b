//! Request body extraction with uniform error mapping.
//!
//! Deserialization failures (malformed JSON, wrong content type, unknown or
//! mistyped fields) become [`AppError::BadRequest`]; `validator` failures
//! become a `VALIDATION_ERROR`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Map a JSON extraction result to the inner value.
///
/// Handlers that validate in their own terms take
/// `Result<Json<T>, JsonRejection>` and call this.
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// JSON body that has passed its `validator` rules.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = extract_json(Json::<T>::from_request(req, state).await)?;
        value
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        Ok(Self(value))
    }
}
