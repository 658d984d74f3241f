use crate::{AppConfig, routes};
use axum::{Extension, Router};
use manabi_db::sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub(crate) fn create_app(app_config: AppConfig, deletable: bool, pool: DatabaseConnection) -> Router {
    Router::new()
        .merge(routes::pages::create_router())
        .nest("/admin", routes::admin::create_router(deletable))
        .nest("/status", routes::status::create_router())
        .layer(
            // Router layers are called bottom to top
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(app_config))
                .layer(Extension(pool)),
        )
        .with_state(())
}
