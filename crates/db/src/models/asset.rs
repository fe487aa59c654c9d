//! Equipment inventory row model.

use envanter_core::types::{AssetId, Date, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `assets` table.
///
/// Serialized as-is in API responses, so field names match the column names.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Asset {
    pub id: AssetId,
    pub tur: String,
    pub model: String,
    pub seri: String,
    pub atanan: Option<String>,
    pub departman: Option<String>,
    pub durum: Option<String>,
    pub konum: Option<String>,
    pub tarih: Option<Date>,
    pub not: Option<String>,
    pub updated_at: Timestamp,
}
