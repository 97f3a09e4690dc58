//! Repository for the `images` table.

use parksphere_core::catalog::{IMAGE_TYPE_PHOTO, IMAGE_TYPE_SATELLITE};
use parksphere_core::types::DbId;

use crate::models::park::GalleryImage;
use crate::DbPool;

/// Reads gallery and satellite images for a park.
pub struct ImageRepo;

impl ImageRepo {
    /// All `photo` images for a park in ordering-key order.
    ///
    /// An unknown park id yields an empty gallery, not an error.
    pub async fn fetch_gallery(
        pool: &DbPool,
        park_id: DbId,
    ) -> Result<Vec<GalleryImage>, sqlx::Error> {
        sqlx::query_as::<_, GalleryImage>(
            "SELECT url, blur_hash AS blur, attribution \
             FROM images \
             WHERE park_id = ?1 AND type = ?2 \
             ORDER BY id",
        )
        .bind(park_id)
        .bind(IMAGE_TYPE_PHOTO)
        .fetch_all(pool)
        .await
    }

    /// URL of the park's satellite image with the smallest ordering key.
    pub async fn fetch_satellite(
        pool: &DbPool,
        park_id: DbId,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT url \
             FROM images \
             WHERE park_id = ?1 AND type = ?2 \
             ORDER BY id \
             LIMIT 1",
        )
        .bind(park_id)
        .bind(IMAGE_TYPE_SATELLITE)
        .fetch_optional(pool)
        .await
    }
}
