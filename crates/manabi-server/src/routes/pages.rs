use crate::AppConfig;
use crate::routes::error::PagesError;
use crate::views;
use axum::Extension;
use axum::extract::{Form, Path};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{Router, get};
use manabi_db::sea_orm::DatabaseConnection;
use manabi_db::{entry, topic};
use manabi_model::entry::Entry;
use manabi_model::partial::{EditEntry, NewEntry, NewTopic};
use manabi_model::topic::Topic;
use manabi_model_tools::convert::FromDbModel;
use serde::Deserialize;
use serde_json::json;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/topics", get(topics))
        .route("/topics/{topic_id}", get(topic))
        .route("/new_topic", get(new_topic_form).post(create_topic))
        .route("/new_entry/{topic_id}", get(new_entry_form).post(create_entry))
        .route("/edit_entry/{entry_id}", get(edit_entry_form).post(update_entry))
        .with_state(())
}

/// Shared shape of every submission; a missing field counts as empty and is
/// caught by validation rather than rejected by the extractor.
#[derive(Debug, Deserialize)]
pub(crate) struct TextForm {
    #[serde(default)]
    text: String,
}

pub(crate) async fn index(Extension(config): Extension<AppConfig>) -> Result<impl IntoResponse, PagesError> {
    Ok(views::render(config.templates(), "index", &json!({}))?)
}

pub(crate) async fn topics(
    Extension(config): Extension<AppConfig>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, PagesError> {
    let topics = topic::Query::list_topics(&conn).await?;

    let topics = topics.into_iter().map(FromDbModel::from_db_model).collect::<Vec<Topic>>();
    Ok(views::render(config.templates(), "topics", &json!({ "topics": topics }))?)
}

pub(crate) async fn topic(
    Extension(config): Extension<AppConfig>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<i32>,
) -> Result<impl IntoResponse, PagesError> {
    let topic = require_topic(&conn, topic_id).await?;
    let entries = entry::Query::list_entries_for_topic(&conn, topic_id).await?;

    let entries = entries.into_iter().map(FromDbModel::from_db_model).collect::<Vec<Entry>>();
    let data = json!({ "topic": topic, "entries": entries });
    Ok(views::render(config.templates(), "topic", &data)?)
}

pub(crate) async fn new_topic_form(Extension(config): Extension<AppConfig>) -> Result<impl IntoResponse, PagesError> {
    let data = json!({ "text": "", "errors": [] });
    Ok(views::render(config.templates(), "new_topic", &data)?)
}

pub(crate) async fn create_topic(
    Extension(config): Extension<AppConfig>,
    Extension(conn): Extension<DatabaseConnection>,
    Form(form): Form<TextForm>,
) -> Result<Response, PagesError> {
    let new_topic = match NewTopic::parse(&form.text) {
        Ok(new_topic) => new_topic,
        Err(error) => {
            let data = json!({ "text": form.text, "errors": [error.to_string()] });
            return Ok(views::render(config.templates(), "new_topic", &data)?.into_response());
        }
    };

    let created = topic::Mutation::create_topic(&conn, new_topic.into_text()).await?;
    tracing::debug!(topic_id = created.id, "topic created");

    Ok(Redirect::to("/topics").into_response())
}

pub(crate) async fn new_entry_form(
    Extension(config): Extension<AppConfig>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<i32>,
) -> Result<impl IntoResponse, PagesError> {
    let topic = require_topic(&conn, topic_id).await?;

    let data = json!({ "topic": topic, "text": "", "errors": [] });
    Ok(views::render(config.templates(), "new_entry", &data)?)
}

pub(crate) async fn create_entry(
    Extension(config): Extension<AppConfig>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<i32>,
    Form(form): Form<TextForm>,
) -> Result<Response, PagesError> {
    // Resolve the topic first so a submission against a vanished topic 404s
    // instead of tripping the foreign key.
    let topic = require_topic(&conn, topic_id).await?;

    let new_entry = match NewEntry::parse(&form.text) {
        Ok(new_entry) => new_entry,
        Err(error) => {
            let data = json!({ "topic": topic, "text": form.text, "errors": [error.to_string()] });
            return Ok(views::render(config.templates(), "new_entry", &data)?.into_response());
        }
    };

    let created = entry::Mutation::create_entry(&conn, topic_id, new_entry.into_text()).await?;
    tracing::debug!(entry_id = created.id, topic_id, "entry created");

    Ok(Redirect::to(&format!("/topics/{topic_id}")).into_response())
}

pub(crate) async fn edit_entry_form(
    Extension(config): Extension<AppConfig>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(entry_id): Path<i32>,
) -> Result<impl IntoResponse, PagesError> {
    let entry = require_entry(&conn, entry_id).await?;

    let data = json!({ "text": entry.text.clone(), "errors": [], "entry": entry });
    Ok(views::render(config.templates(), "edit_entry", &data)?)
}

pub(crate) async fn update_entry(
    Extension(config): Extension<AppConfig>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(entry_id): Path<i32>,
    Form(form): Form<TextForm>,
) -> Result<Response, PagesError> {
    let entry = require_entry(&conn, entry_id).await?;

    let edit = match EditEntry::parse(&form.text) {
        Ok(edit) => edit,
        Err(error) => {
            let data = json!({ "text": form.text, "errors": [error.to_string()], "entry": entry });
            return Ok(views::render(config.templates(), "edit_entry", &data)?.into_response());
        }
    };

    entry::Mutation::update_entry_text(&conn, entry_id, edit.into_text()).await?;
    tracing::debug!(entry_id, "entry updated");

    Ok(Redirect::to(&format!("/topics/{}", entry.topic_id)).into_response())
}

async fn require_topic(conn: &DatabaseConnection, topic_id: i32) -> Result<Topic, PagesError> {
    let topic = topic::Query::find_topic_by_id(conn, topic_id)
        .await?
        .ok_or(PagesError::NotFound)?;
    Ok(Topic::from_db_model(topic))
}

async fn require_entry(conn: &DatabaseConnection, entry_id: i32) -> Result<Entry, PagesError> {
    let entry = entry::Query::find_entry_by_id(conn, entry_id)
        .await?
        .ok_or(PagesError::NotFound)?;
    Ok(Entry::from_db_model(entry))
}
