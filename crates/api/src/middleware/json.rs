//! JSON body extractor that reports rejections as [`AppError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::error::AppError;

/// Like [`axum::Json`], but a body that is missing, unparseable, or of the
/// wrong shape is rejected with a `{ "detail": ... }` JSON error instead of
/// axum's plain-text default.
///
/// Status codes follow axum's classification: 415 without a JSON content
/// type, 400 for a syntax error, 422 for a missing or mistyped field.
///
/// ```ignore
/// async fn create(ValidatedJson(body): ValidatedJson<CreateThing>) -> AppResult<Json<Thing>> {
///     ...
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
