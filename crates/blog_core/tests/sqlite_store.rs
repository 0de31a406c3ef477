use blog_core::db::migrations::latest_version;
use blog_core::db::{open_db, DbError};
use blog_core::{
    BlogStore, KeyValueStore, KvBlogRepository, Locale, NewPost, SqliteStore, StoreError,
    POSTS_KEY,
};
use rusqlite::Connection;

#[test]
fn fresh_database_has_kv_table_at_latest_version() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("blog.db")).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries');",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn newer_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 99;").unwrap();
    drop(conn);

    let err = SqliteStore::open(&path).err().unwrap();
    assert!(matches!(
        err,
        StoreError::Db(DbError::UnsupportedSchemaVersion { db_version: 99, .. })
    ));
}

#[test]
fn slots_overwrite_and_remove() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.get("k").unwrap(), None);

    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn blog_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blog.db");

    let (post_id, snapshot) = {
        let mut blog = BlogStore::open(KvBlogRepository::new(SqliteStore::open(&path).unwrap()));
        let post_id = blog.create_post(NewPost::new("Hello", "world")).unwrap().id;
        blog.add_comment(post_id, "ann", "hi").unwrap();
        blog.set_locale(Locale::Ru).unwrap();
        (post_id, blog.posts().to_vec())
    };

    let store = SqliteStore::open(&path).unwrap();
    let raw = store.get(POSTS_KEY).unwrap().unwrap();
    assert!(raw.starts_with('['));

    let blog = BlogStore::open(KvBlogRepository::new(store));
    assert_eq!(blog.posts(), snapshot.as_slice());
    assert_eq!(blog.post(post_id).unwrap().comments.len(), 1);
    assert_eq!(blog.locale(), Locale::Ru);
}

#[test]
fn reload_picks_up_writes_from_another_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.db");

    let mut reader = BlogStore::open(KvBlogRepository::new(SqliteStore::open(&path).unwrap()));
    let mut writer = BlogStore::open(KvBlogRepository::new(SqliteStore::open(&path).unwrap()));
    assert!(reader.posts().is_empty());

    let post_id = writer
        .create_post(NewPost::new("From writer", "body"))
        .unwrap()
        .id;
    writer.set_locale(Locale::Ru).unwrap();
    assert!(reader.posts().is_empty());

    reader.reload();
    assert_eq!(reader.posts(), writer.posts());
    assert_eq!(reader.locale(), Locale::Ru);

    let comment = reader.add_comment(post_id, "ann", "seen it").unwrap();
    assert!(comment.id.0 > post_id.0);

    writer.reload();
    assert_eq!(writer.post(post_id).unwrap().comments, vec![comment]);
}
