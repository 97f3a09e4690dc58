//! Integration tests for the optional `/assets` static file mount.

mod common;

use axum::http::StatusCode;
use common::{get, test_config};
use http_body_util::BodyExt;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn assets_are_served_from_configured_dir(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("earth.txt"), "texture").unwrap();

    let mut config = test_config();
    config.assets_dir = Some(dir.path().to_path_buf());
    let app = common::build_test_app_with(pool, &config);

    let response = get(app, "/assets/earth.txt").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"texture");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assets_not_mounted_without_config(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/assets/earth.txt").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_assets_dir_is_skipped(pool: SqlitePool) {
    let mut config = test_config();
    config.assets_dir = Some("/definitely/not/a/real/dir".into());
    let app = common::build_test_app_with(pool, &config);

    let response = get(app, "/assets/earth.txt").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
