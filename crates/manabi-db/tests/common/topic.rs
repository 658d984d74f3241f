use manabi_db::sea_orm::DatabaseConnection;
use manabi_db::topic;
use manabi_entity::topic::Model as TopicModel;

#[allow(dead_code)]
pub async fn create_test_topic(db: &DatabaseConnection, text: &str) -> TopicModel {
    topic::Mutation::create_topic(db, text.to_owned()).await.unwrap()
}
