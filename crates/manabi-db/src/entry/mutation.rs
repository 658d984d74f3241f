use manabi_entity::entry::{self, Model as EntryModel};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    /// The caller is expected to have resolved the topic first; a dangling
    /// `topic_id` is rejected by the foreign key.
    pub async fn create_entry(db: &DatabaseConnection, topic_id: i32, text: String) -> Result<EntryModel, DbErr> {
        let entry = entry::ActiveModel {
            id: NotSet,
            topic_id: ActiveValue::Set(topic_id),
            text: ActiveValue::Set(text),
            date_added: ActiveValue::Set(chrono::Utc::now().fixed_offset()),
        };

        entry
            .insert(db)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %topic_id, "failed to create entry"))
    }

    /// Replaces the entry text in place; `date_added` stays untouched.
    pub async fn update_entry_text(db: &DatabaseConnection, entry_id: i32, text: String) -> Result<(), DbErr> {
        let entry = entry::ActiveModel {
            id: NotSet,
            topic_id: NotSet,
            text: ActiveValue::Set(text),
            date_added: NotSet,
        };

        let res = entry::Entity::update_many()
            .set(entry)
            .filter(entry::Column::Id.eq(entry_id))
            .exec(db)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %entry_id, "failed to update entry"))?;

        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("Entry {entry_id} not found")));
        }
        Ok(())
    }
}
