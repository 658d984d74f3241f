use crate::routes::error::AdminError;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::{Router, delete, get};
use axum::{Extension, Json};
use chrono::{DateTime, FixedOffset};
use manabi_db::sea_orm::DatabaseConnection;
use manabi_db::{entry, topic};
use manabi_model::entry::Entry;
use manabi_model::topic::Topic;
use manabi_model_tools::convert::FromDbModel;
use serde::Serialize;

pub(crate) fn create_router<S>(deletable: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route("/topics", get(list_topics))
        .route("/topics/{topic_id}", get(get_topic));

    if deletable {
        router = router.route("/topics/{topic_id}", delete(delete_topic));
    }

    router.with_state(())
}

#[derive(Debug, Serialize)]
struct EntryPreview {
    id: i32,
    preview: String,
    date_added: DateTime<FixedOffset>,
}

#[derive(Debug, Serialize)]
struct TopicDetail {
    #[serde(flatten)]
    topic: Topic,
    entries: Vec<EntryPreview>,
}

pub(crate) async fn list_topics(
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, AdminError> {
    let topics = topic::Query::list_topics(&conn).await?;

    let topics = topics.into_iter().map(FromDbModel::from_db_model).collect::<Vec<Topic>>();
    Ok(Json(topics))
}

pub(crate) async fn get_topic(
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<i32>,
) -> Result<impl IntoResponse, AdminError> {
    let topic = topic::Query::find_topic_by_id(&conn, topic_id)
        .await?
        .ok_or(AdminError::NotFound)?;
    let entries = entry::Query::list_entries_for_topic(&conn, topic_id).await?;

    let entries = entries
        .into_iter()
        .map(|model| {
            let entry = Entry::from_db_model(model);
            EntryPreview {
                id: entry.id,
                preview: entry.preview(),
                date_added: entry.date_added,
            }
        })
        .collect();

    Ok(Json(TopicDetail {
        topic: Topic::from_db_model(topic),
        entries,
    }))
}

pub(crate) async fn delete_topic(
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<i32>,
) -> Result<impl IntoResponse, AdminError> {
    topic::Mutation::delete_topic(&conn, topic_id).await?;
    tracing::debug!(topic_id, "topic deleted");

    Ok(http::StatusCode::NO_CONTENT)
}
