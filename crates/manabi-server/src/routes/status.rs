use axum::response::IntoResponse;
use axum::routing::{Router, get};
use axum::{Extension, Json};
use http::StatusCode;
use manabi_db::sea_orm::DatabaseConnection;
use serde_json::json;
use std::error::Error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(get_status)).with_state(())
}

pub(crate) async fn get_status(Extension(conn): Extension<DatabaseConnection>) -> impl IntoResponse {
    match conn.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "database": "ok" }))),
        Err(error) => {
            tracing::error!(error = &error as &dyn Error, "database unreachable");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "database": "error" })))
        }
    }
}
