//! Repository for the `assets` table.

use envanter_core::assets::NewAsset;
use sqlx::PgPool;

use crate::models::asset::Asset;

/// Column list for `assets` queries. `not` is a reserved word.
const COLUMNS: &str = "\
    id, tur, model, seri, atanan, departman, durum, konum, \
    tarih, \"not\", updated_at";

/// Provides list, upsert and delete for equipment records.
pub struct AssetRepo;

impl AssetRepo {
    /// All assets, dated rows first (newest date first), undated rows last,
    /// ties broken by most recent write.
    pub async fn list(pool: &PgPool) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assets \
             ORDER BY (tarih IS NULL), tarih DESC, updated_at DESC"
        );
        sqlx::query_as::<_, Asset>(&query).fetch_all(pool).await
    }

    /// Find a single asset by id. The HTTP surface never reads one row; the
    /// test suites use this to check what was stored.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert the asset, or overwrite every column of the existing row with
    /// the same id. Omitted optional fields are written as NULL.
    ///
    /// A single `INSERT ... ON CONFLICT` statement, so concurrent writers to
    /// the same id serialize on the row.
    pub async fn upsert(pool: &PgPool, input: &NewAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets \
                (id, tur, model, seri, atanan, departman, durum, konum, tarih, \"not\", updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW()) \
             ON CONFLICT (id) DO UPDATE SET \
                tur = EXCLUDED.tur, \
                model = EXCLUDED.model, \
                seri = EXCLUDED.seri, \
                atanan = EXCLUDED.atanan, \
                departman = EXCLUDED.departman, \
                durum = EXCLUDED.durum, \
                konum = EXCLUDED.konum, \
                tarih = EXCLUDED.tarih, \
                \"not\" = EXCLUDED.\"not\", \
                updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.id)
            .bind(&input.tur)
            .bind(&input.model)
            .bind(&input.seri)
            .bind(&input.atanan)
            .bind(&input.departman)
            .bind(&input.durum)
            .bind(&input.konum)
            .bind(input.tarih)
            .bind(&input.not)
            .fetch_one(pool)
            .await
    }

    /// Delete an asset by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
