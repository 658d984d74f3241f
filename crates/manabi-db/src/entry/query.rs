use manabi_entity::entry::{self, Entity as Entry, Model as EntryModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;

pub struct Query;

impl Query {
    /// Entries under one topic, newest first.
    pub async fn list_entries_for_topic<C: ConnectionTrait>(
        conn: &C,
        topic_id: i32,
    ) -> Result<Vec<EntryModel>, DbErr> {
        Entry::find()
            .filter(entry::Column::TopicId.eq(topic_id))
            .order_by_desc(entry::Column::DateAdded)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %topic_id, "failed to list entries"))
    }

    pub async fn find_entry_by_id<C: ConnectionTrait>(conn: &C, entry_id: i32) -> Result<Option<EntryModel>, DbErr> {
        Entry::find_by_id(entry_id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %entry_id, "failed to load entry"))
    }
}
