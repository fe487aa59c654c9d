/// Asset primary keys are opaque text identifiers.
pub type AssetId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date without a time zone (the `tarih` column).
pub type Date = chrono::NaiveDate;
