use axum::response::{IntoResponse, Response};
use http::StatusCode;
use manabi_db::sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum PagesError {
    #[error("Database error.")]
    Db(#[from] DbErr),

    #[error("Error rendering template")]
    Render(#[from] handlebars::RenderError),

    #[error("Topic or entry could not be found")]
    NotFound,
}

impl IntoResponse for PagesError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound | Self::Db(DbErr::RecordNotFound(_)) => StatusCode::NOT_FOUND.into_response(),
            _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

#[derive(Error, Debug)]
pub(crate) enum AdminError {
    #[error("Database error.")]
    Db(#[from] DbErr),

    #[error("Topic could not be found")]
    NotFound,
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound | Self::Db(DbErr::RecordNotFound(_)) => StatusCode::NOT_FOUND.into_response(),
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
