mod common;

use crate::common::setup_schema;
use crate::common::topic::create_test_topic;
use manabi_db::sea_orm::{ConnectionTrait, Database, DbErr, EntityTrait};
use manabi_db::{entry, topic};
use manabi_entity::entry::Entity as Entry;
use manabi_entity::topic::Entity as Topic;
use std::time::Duration;
use test_log::test;

#[test(tokio::test)]
async fn test_create_and_list_topics() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    create_test_topic(db, "Chess").await;
    tokio::time::sleep(Duration::from_millis(5)).await;
    create_test_topic(db, "Rock Climbing").await;

    let topics = topic::Query::list_topics(db).await.unwrap();
    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0].text, "Chess");
    assert_eq!(topics[1].text, "Rock Climbing");
}

#[test(tokio::test)]
async fn test_find_topic_by_id() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let chess = create_test_topic(db, "Chess").await;

    let found = topic::Query::find_topic_by_id(db, chess.id).await.unwrap().unwrap();
    assert_eq!(found.text, "Chess");
    assert_eq!(found.date_added, chess.date_added);

    assert!(topic::Query::find_topic_by_id(db, chess.id + 1).await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_delete_topic_cascades_to_entries() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let chess = create_test_topic(db, "Chess").await;
    let climbing = create_test_topic(db, "Rock Climbing").await;

    entry::Mutation::create_entry(db, chess.id, "Openings are critical".to_owned())
        .await
        .unwrap();
    entry::Mutation::create_entry(db, chess.id, "Endgames matter too".to_owned())
        .await
        .unwrap();
    let kept = entry::Mutation::create_entry(db, climbing.id, "Trust the rubber".to_owned())
        .await
        .unwrap();

    topic::Mutation::delete_topic(db, chess.id).await.unwrap();

    assert!(Topic::find_by_id(chess.id).one(db).await.unwrap().is_none());

    let remaining = Entry::find().all(db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
    assert_eq!(remaining[0].topic_id, climbing.id);
}

#[test(tokio::test)]
async fn test_foreign_key_cascades_on_raw_delete() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let chess = create_test_topic(db, "Chess").await;
    let climbing = create_test_topic(db, "Rock Climbing").await;

    entry::Mutation::create_entry(db, chess.id, "Openings are critical".to_owned())
        .await
        .unwrap();
    let kept = entry::Mutation::create_entry(db, climbing.id, "Trust the rubber".to_owned())
        .await
        .unwrap();

    // Bypass the mutation layer; the schema's ON DELETE CASCADE has to
    // clean up the entries on its own.
    db.execute_unprepared(&format!("DELETE FROM \"topic\" WHERE \"id\" = {}", chess.id))
        .await
        .unwrap();

    let remaining = Entry::find().all(db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
}

#[test(tokio::test)]
async fn test_delete_missing_topic_is_not_found() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let res = topic::Mutation::delete_topic(db, 4711).await;
    assert!(matches!(res, Err(DbErr::RecordNotFound(_))));
}
