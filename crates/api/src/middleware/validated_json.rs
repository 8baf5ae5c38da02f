//! JSON body extractor that also runs `validator` checks.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Deserializes a JSON body and validates it before the handler runs.
///
/// - Malformed JSON, a wrong content type or an unknown enum value is
///   rejected with `400 BAD_REQUEST`.
/// - Blank or missing required fields are rejected with the per-field
///   `VALIDATION_ERROR` body.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<ProjectInput>) -> AppResult<Json<()>> {
///     // input.name is non-blank and input.status is Some here
///     Ok(Json(()))
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
