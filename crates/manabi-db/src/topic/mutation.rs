use crate::util::FlattenTransactionResultExt;
use manabi_entity::entry;
use manabi_entity::topic::{self, Model as TopicModel};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    TransactionTrait,
};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn create_topic(db: &DatabaseConnection, text: String) -> Result<TopicModel, DbErr> {
        let topic = topic::ActiveModel {
            id: NotSet,
            text: ActiveValue::Set(text),
            date_added: ActiveValue::Set(chrono::Utc::now().fixed_offset()),
        };

        topic
            .insert(db)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to create topic"))
    }

    /// Removes the topic and every entry under it in one transaction. The
    /// schema also carries `ON DELETE CASCADE`, so the entries go away even
    /// on a connection that bypasses this mutation.
    pub async fn delete_topic(db: &DatabaseConnection, topic_id: i32) -> Result<(), DbErr> {
        db.transaction::<_, (), DbErr>(|txn| {
            Box::pin(async move {
                entry::Entity::delete_many()
                    .filter(entry::Column::TopicId.eq(topic_id))
                    .exec(txn)
                    .await?;

                let res = topic::Entity::delete_by_id(topic_id).exec(txn).await?;
                if res.rows_affected == 0 {
                    return Err(DbErr::RecordNotFound(format!("Topic {topic_id} not found")));
                }
                Ok(())
            })
        })
        .await
        .flatten_res()
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, %topic_id, "failed to delete topic"))
    }
}
