//! Wrappers around axum's extractors so that rejected input comes back as a
//! JSON `{error}` body like every other failure. The status axum picked for
//! the rejection is kept (415 for a missing JSON content type, 413 past the
//! default 2 MB body limit, 422 for a body of the wrong shape).

use super::errors::ServerError;
use async_trait::async_trait;
use axum::{
    body::HttpBody,
    extract::{FromRequest, FromRequestParts, Path},
    http::{request::Parts, Request},
    BoxError, Json,
};
use serde::de::DeserializeOwned;

pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for JsonBody<T>
where
    T: DeserializeOwned,
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(
        req: Request<B>,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(ServerError::Validation {
                status: rejection.status(),
                message: rejection.body_text(),
            }),
        }
    }
}

pub struct NoteId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for NoteId
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ServerError::Validation {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        Ok(NoteId(id))
    }
}
