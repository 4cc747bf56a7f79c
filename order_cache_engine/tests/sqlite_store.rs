mod support;

use order_cache_engine::{db_types::OrderId, traits::OrderStore};
use support::prepare_env::{prepare_test_env, random_db_path};

#[tokio::test]
async fn insert_and_enumerate_in_insertion_order() {
    let db = prepare_test_env(&random_db_path()).await;
    db.insert(&OrderId::from("b"), "{\"v\":1}").await.unwrap();
    db.insert(&OrderId::from("a"), "{\"v\":2}").await.unwrap();
    db.insert(&OrderId::from("b"), "{\"v\":3}").await.unwrap();
    let rows = db.enumerate().await.unwrap();
    let ids = rows.iter().map(|r| r.order_id.as_str()).collect::<Vec<_>>();
    let payloads = rows.iter().map(|r| r.payload.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["b", "a", "b"]);
    assert_eq!(payloads, vec!["{\"v\":1}", "{\"v\":2}", "{\"v\":3}"]);
    assert_eq!(db.row_count_for_order(&OrderId::from("b")).await.unwrap(), 2);
    db.close().await;
}

#[tokio::test]
async fn fresh_database_enumerates_nothing() {
    let db = prepare_test_env(&random_db_path()).await;
    assert!(db.enumerate().await.unwrap().is_empty());
    // Running migrations twice is harmless
    db.migrate().await.unwrap();
    db.close().await;
}

#[tokio::test]
async fn missing_table_is_an_error() {
    let _ = env_logger::try_init();
    let url = random_db_path();
    support::prepare_env::create_database(&url).await;
    let db = order_cache_engine::SqliteDatabase::new_with_url(&url, 1).await.unwrap();
    assert!(db.enumerate().await.is_err());
    assert!(db.insert(&OrderId::from("x"), "{}").await.is_err());
    db.close().await;
}

#[tokio::test]
async fn missing_database_directory_is_created() {
    let _ = env_logger::try_init();
    let dir = std::env::temp_dir().join(format!("ocs_test_dir_{}", rand::random::<u64>())).join("nested");
    let url = format!("sqlite://{}", dir.join("orders.db").display());
    assert!(!dir.exists());
    let db = order_cache_engine::SqliteDatabase::new_with_url(&url, 1).await.unwrap();
    db.migrate().await.unwrap();
    db.insert(&OrderId::from("1"), "{}").await.unwrap();
    assert_eq!(db.enumerate().await.unwrap().len(), 1);
    assert!(dir.join("orders.db").exists());
    db.close().await;
}
