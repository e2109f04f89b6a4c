use super::errors::ServerError;
use axum::{
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// axum answers a known path with the wrong method with an empty 405. Give
/// it the same JSON `{error}` body as every other failure, keeping `Allow`.
pub async fn json_method_not_allowed<B>(
    request: Request<B>,
    next: Next<B>,
) -> Response {
    let described = format!("{} {}", request.method(), request.uri().path());
    let response = next.run(request).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut replaced =
        ServerError::MethodNotAllowed(format!("Method not allowed: {described}"))
            .into_response();
    if let Some(allow) = allow {
        replaced.headers_mut().insert(header::ALLOW, allow);
    }

    replaced
}
