use sea_orm::{Database, DatabaseConnection};

use migration::MigratorTrait;
use store::{Binding, Store, StoreError};
use uuid::Uuid;

async fn store_with_db() -> (Store, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let store = Store::builder().database(db.clone()).build().unwrap();
    (store, db)
}

async fn seeded_store() -> Store {
    let (store, _db) = store_with_db().await;
    store.create_user("alice", "alice@x.com").await.unwrap();
    store.create_user("bob", "bob@x.com").await.unwrap();
    store.create_user("alicia", "alicia@x.com").await.unwrap();
    store
}

fn names(users: &[store::User]) -> Vec<&str> {
    users.iter().map(|u| u.username.as_str()).collect()
}

#[tokio::test]
async fn users_come_back_in_insertion_order() {
    let store = seeded_store().await;

    let users = store.users().await.unwrap();
    assert_eq!(names(&users), vec!["alice", "bob", "alicia"]);
    assert_eq!(
        users.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[tokio::test]
async fn user_by_id_returns_the_stored_row() {
    let store = seeded_store().await;

    let user = store.user(2).await.unwrap();
    assert_eq!(user.id, 2);
    assert_eq!(user.username, "bob");
    assert_eq!(user.email, "bob@x.com");
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let store = seeded_store().await;

    assert_eq!(store.user(99).await, Err(StoreError::UserNotFound(99)));
}

#[tokio::test]
async fn duplicate_usernames_are_allowed() {
    let (store, _db) = store_with_db().await;

    let first = store.create_user("sam", "one@x.com").await.unwrap();
    let second = store.create_user("sam", "two@x.com").await.unwrap();
    assert!(second.id > first.id);
    assert_eq!(store.users().await.unwrap().len(), 2);
}

#[tokio::test]
async fn blank_fields_are_rejected() {
    let (store, _db) = store_with_db().await;

    assert!(matches!(
        store.create_user("  ", "a@x.com").await,
        Err(StoreError::InvalidField(_))
    ));
    assert!(matches!(
        store.create_user("alice", "").await,
        Err(StoreError::InvalidField(_))
    ));
    assert!(store.users().await.unwrap().is_empty());
}

#[tokio::test]
async fn parameterized_search_matches_substrings() {
    let store = seeded_store().await;

    let found = store
        .search_users("ali", Binding::Parameterized)
        .await
        .unwrap();
    assert_eq!(names(&found), vec!["alice", "alicia"]);

    let everyone = store.search_users("", Binding::Parameterized).await.unwrap();
    assert_eq!(everyone.len(), 3);
}

#[tokio::test]
async fn parameterized_search_treats_quotes_as_data() {
    let store = seeded_store().await;

    let found = store
        .search_users("x' OR 1=1 --", Binding::Parameterized)
        .await
        .unwrap();
    assert!(found.is_empty());

    let found = store.search_users("'", Binding::Parameterized).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn interpolated_search_matches_plain_terms() {
    let store = seeded_store().await;

    let found = store.search_users("bo", Binding::Interpolated).await.unwrap();
    assert_eq!(names(&found), vec!["bob"]);
}

#[tokio::test]
async fn interpolated_search_is_injectable() {
    let store = seeded_store().await;

    let found = store
        .search_users("nobody' OR 1=1 --", Binding::Interpolated)
        .await
        .unwrap();
    assert_eq!(found.len(), 3);
}

#[tokio::test]
async fn interpolated_search_breaks_on_a_stray_quote() {
    let store = seeded_store().await;

    let res = store.search_users("'", Binding::Interpolated).await;
    assert!(matches!(res, Err(StoreError::Database(_))));
}

#[tokio::test]
async fn delete_all_empties_the_table_and_ids_are_not_reused() {
    let store = seeded_store().await;

    assert_eq!(store.delete_all().await.unwrap(), 3);
    assert!(store.users().await.unwrap().is_empty());
    assert_eq!(store.delete_all().await.unwrap(), 0);

    let next = store.create_user("carol", "carol@x.com").await.unwrap();
    assert_eq!(next.id, 4);
}

#[tokio::test]
async fn file_database_survives_reconnect_and_repeated_migration() {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_dbs");
    std::fs::create_dir_all(&root).unwrap();

    let path = root.join(format!("store_{}.db", Uuid::new_v4()));
    let url = format!("sqlite:{}?mode=rwc", path.display());

    {
        let db = Database::connect(&url).await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        let store = Store::builder().database(db.clone()).build().unwrap();
        store.create_user("alice", "alice@x.com").await.unwrap();
        db.close().await.unwrap();
    }

    let db = Database::connect(&url).await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let store = Store::builder().database(db.clone()).build().unwrap();
    let users = store.users().await.unwrap();
    assert_eq!(names(&users), vec!["alice"]);
    db.close().await.unwrap();

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn parameterized_search_keeps_like_wildcards() {
    let store = seeded_store().await;

    let everyone = store.search_users("%", Binding::Parameterized).await.unwrap();
    assert_eq!(names(&everyone), vec!["alice", "bob", "alicia"]);

    let found = store.search_users("b_b", Binding::Parameterized).await.unwrap();
    assert_eq!(names(&found), vec!["bob"]);
}
