use super::{controllers, middleware, models};
use axum::{
    middleware::from_fn,
    routing::{delete, get, post, Router},
};

#[rustfmt::skip]
pub fn get_routes() -> Router<models::AppState> {
    Router::new()
        .route("/", get(controllers::root))
        .route("/static/script.js", get(controllers::get_script_js))
        .route("/ping", get(controllers::pong))
        .route("/add-note", post(controllers::add_note))
        .route("/get-notes", get(controllers::get_notes))
        .route("/delete-note/:id", delete(controllers::delete_note))
        .fallback(controllers::not_found)
        .layer(from_fn(middleware::json_method_not_allowed))
}
