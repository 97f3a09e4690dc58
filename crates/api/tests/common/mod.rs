//! Shared helpers for API integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use parksphere_api::config::ServerConfig;
use parksphere_api::router::build_app_router;
use parksphere_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        assets_dir: None,
    }
}

/// Build the full application router over the given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with(pool, &test_config())
}

pub fn build_test_app_with(pool: SqlitePool, config: &ServerConfig) -> Router {
    build_app_router(AppState { pool }, config)
}

/// Issue a GET request against the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

pub async fn insert_park(
    pool: &SqlitePool,
    id: i64,
    code: &str,
    name: &str,
    biome: &str,
    summary: &str,
    activities: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO parks \
             (id, code, name, summary, coordinates_lat, coordinates_lon, \
              biome, established, area_acres, activities, climate) \
         VALUES (?1, ?2, ?3, ?4, 44.6, -110.5, ?5, 1872, 2219791, ?6, NULL)",
    )
    .bind(id)
    .bind(code)
    .bind(name)
    .bind(summary)
    .bind(biome)
    .bind(activities)
    .execute(pool)
    .await
    .unwrap_or_else(|e| panic!("failed to insert park {code}: {e}"));
}

pub async fn insert_image(
    pool: &SqlitePool,
    id: i64,
    park_id: i64,
    kind: &str,
    url: &str,
    attribution: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO images (id, park_id, type, url, blur_hash, attribution) \
         VALUES (?1, ?2, ?3, ?4, 'LEHV6nWB2yk8', ?5)",
    )
    .bind(id)
    .bind(park_id)
    .bind(kind)
    .bind(url)
    .bind(attribution)
    .execute(pool)
    .await
    .unwrap_or_else(|e| panic!("failed to insert image {id}: {e}"));
}

/// Two desert parks and one geothermal park, with images on Yellowstone.
pub async fn seed_catalog(pool: &SqlitePool) {
    insert_park(
        pool,
        1,
        "YELL",
        "Yellowstone",
        "geothermal",
        "Geysers and hot springs on a supervolcano.",
        Some(r#"["hiking","wildlife viewing"]"#),
    )
    .await;
    insert_park(
        pool,
        2,
        "JOTR",
        "Joshua Tree",
        "desert",
        "Where two desert ecosystems meet.",
        None,
    )
    .await;
    insert_park(
        pool,
        3,
        "DEVA",
        "Death Valley",
        "desert",
        "Hottest, driest and lowest national park.",
        Some("[]"),
    )
    .await;

    insert_image(pool, 1, 1, "photo", "/assets/yell/1.jpg", Some("NPS")).await;
    insert_image(pool, 2, 1, "photo", "/assets/yell/2.jpg", None).await;
    insert_image(pool, 3, 1, "satellite", "/assets/yell/sat.jpg", None).await;
}
