//! Request extractors.

use axum::extract::{FromRequest, Request};
use axum::Json;
use roster_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been decoded and has passed its `validator` rules.
///
/// Malformed JSON, wrong content type and missing fields reject with
/// `400 BAD_REQUEST`; constraint violations reject with
/// `400 VALIDATION_ERROR`. Either way the handler never runs.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(CoreError::from)?;

        Ok(Self(value))
    }
}
