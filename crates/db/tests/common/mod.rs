//! Seed helpers shared by the repository and catalog tests.

#![allow(dead_code)]

use sqlx::SqlitePool;

/// Minimal description of a park row to insert.
pub struct SeedPark<'a> {
    pub id: i64,
    pub code: &'a str,
    pub name: &'a str,
    pub biome: &'a str,
    pub summary: &'a str,
    pub activities: Option<&'a str>,
    pub climate: Option<&'a str>,
}

impl<'a> SeedPark<'a> {
    pub fn new(id: i64, code: &'a str, name: &'a str, biome: &'a str) -> Self {
        Self {
            id,
            code,
            name,
            biome,
            summary: "A protected area.",
            activities: None,
            climate: None,
        }
    }

    pub fn summary(mut self, summary: &'a str) -> Self {
        self.summary = summary;
        self
    }

    pub fn activities(mut self, activities: &'a str) -> Self {
        self.activities = Some(activities);
        self
    }

    pub fn climate(mut self, climate: &'a str) -> Self {
        self.climate = Some(climate);
        self
    }
}

pub async fn insert_park(pool: &SqlitePool, park: SeedPark<'_>) {
    sqlx::query(
        "INSERT INTO parks \
             (id, code, name, summary, coordinates_lat, coordinates_lon, \
              biome, established, area_acres, activities, climate) \
         VALUES (?1, ?2, ?3, ?4, 36.1, -112.1, ?5, 1919, 1200000, ?6, ?7)",
    )
    .bind(park.id)
    .bind(park.code)
    .bind(park.name)
    .bind(park.summary)
    .bind(park.biome)
    .bind(park.activities)
    .bind(park.climate)
    .execute(pool)
    .await
    .unwrap_or_else(|e| panic!("failed to insert park {}: {e}", park.code));
}

/// Insert an image with an explicit ordering key.
pub async fn insert_image(pool: &SqlitePool, id: i64, park_id: i64, kind: &str, url: &str) {
    sqlx::query(
        "INSERT INTO images (id, park_id, type, url, blur_hash, attribution) \
         VALUES (?1, ?2, ?3, ?4, ?5, NULL)",
    )
    .bind(id)
    .bind(park_id)
    .bind(kind)
    .bind(url)
    .bind(format!("blur-{id}"))
    .execute(pool)
    .await
    .unwrap_or_else(|e| panic!("failed to insert image {id}: {e}"));
}

/// Three parks across two biomes, inserted out of name order.
pub async fn seed_catalog(pool: &SqlitePool) {
    insert_park(
        pool,
        SeedPark::new(1, "ZION", "Zion", "desert")
            .summary("Sandstone canyons carved by the Virgin River.")
            .activities(r#"["hiking","canyoneering"]"#),
    )
    .await;
    insert_park(
        pool,
        SeedPark::new(2, "GLAC", "Glacier", "alpine")
            .summary("Glaciated peaks and alpine lakes.")
            .climate("Cold winters, mild summers"),
    )
    .await;
    insert_park(
        pool,
        SeedPark::new(3, "ARCH", "Arches", "desert")
            .summary("Over two thousand natural stone arches."),
    )
    .await;
}
