use manabi_entity::topic::{self, Entity as Topic, Model as TopicModel};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};
use std::error::Error;

pub struct Query;

impl Query {
    /// All topics, oldest first.
    pub async fn list_topics<C: ConnectionTrait>(conn: &C) -> Result<Vec<TopicModel>, DbErr> {
        Topic::find()
            .order_by_asc(topic::Column::DateAdded)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to list topics"))
    }

    pub async fn find_topic_by_id<C: ConnectionTrait>(conn: &C, topic_id: i32) -> Result<Option<TopicModel>, DbErr> {
        Topic::find_by_id(topic_id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %topic_id, "failed to load topic"))
    }
}
