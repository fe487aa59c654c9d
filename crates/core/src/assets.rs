//! Asset payload decoding and normalization.
//!
//! Request bodies are decoded into an [`AssetPayload`] where every field is
//! optional and loosely typed, then normalized into a [`NewAsset`] that is
//! ready to be written. Normalization trims every string, turns empty
//! optional values into `None`, assigns a fresh id when none was supplied and
//! enforces that `tur`, `model` and `seri` are present.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

use crate::error::CoreError;
use crate::types::{AssetId, Date};

/// Returned when any of `tur`, `model` or `seri` is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "tur/model/seri zorunlu.";

/// Returned when a delete request carries no usable id.
pub const ID_REQUIRED_MESSAGE: &str = "id gerekli.";

/// Returned when `tarih` is present but not a recognizable date.
pub const INVALID_DATE_MESSAGE: &str = "tarih geçersiz.";

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Raw asset fields as sent by the client.
///
/// Text fields accept JSON strings, numbers and booleans. Unknown keys
/// (including a client-sent `updated_at`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssetPayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tur: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub seri: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub atanan: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub departman: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub durum: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub konum: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tarih: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub not: Option<String>,
}

/// Accept a string, number or boolean as text; `null` as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) => Err(serde::de::Error::custom("expected text, found an array")),
        Value::Object(_) => Err(serde::de::Error::custom("expected text, found an object")),
    }
}

/// Decode a request body into an [`AssetPayload`].
///
/// An empty body, malformed JSON or a JSON value that is not an object all
/// decode to an empty payload. A JSON object whose fields have unsupported
/// types (arrays or nested objects) is rejected.
pub fn parse_payload(body: &[u8]) -> Result<AssetPayload, CoreError> {
    let object = match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => value,
        _ => return Ok(AssetPayload::default()),
    };

    serde_json::from_value(object)
        .map_err(|e| CoreError::Validation(format!("Geçersiz istek gövdesi: {e}")))
}

// ---------------------------------------------------------------------------
// Normalized asset
// ---------------------------------------------------------------------------

/// A fully normalized asset, ready for a full-column upsert.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewAsset {
    pub id: AssetId,
    #[validate(length(min = 1))]
    pub tur: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(length(min = 1))]
    pub seri: String,
    pub atanan: Option<String>,
    pub departman: Option<String>,
    pub durum: Option<String>,
    pub konum: Option<String>,
    pub tarih: Option<Date>,
    pub not: Option<String>,
}

impl AssetPayload {
    /// Normalize into a [`NewAsset`], generating an id when none was given.
    pub fn normalize(self) -> Result<NewAsset, CoreError> {
        let tarih = parse_date(self.tarih.as_deref());

        let mut asset = NewAsset {
            id: trimmed(self.id).unwrap_or_else(generate_asset_id),
            tur: trimmed(self.tur).unwrap_or_default(),
            model: trimmed(self.model).unwrap_or_default(),
            seri: trimmed(self.seri).unwrap_or_default(),
            atanan: trimmed(self.atanan),
            departman: trimmed(self.departman),
            durum: trimmed(self.durum),
            konum: trimmed(self.konum),
            tarih: None,
            not: trimmed(self.not),
        };

        asset
            .validate()
            .map_err(|_| CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))?;

        asset.tarih = tarih?;
        Ok(asset)
    }
}

/// Pick the id targeted by a delete request.
///
/// The query string wins over the body; both are trimmed.
pub fn delete_target(query_id: Option<&str>, body: &AssetPayload) -> Result<AssetId, CoreError> {
    query_id
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| body.id.as_deref().map(str::trim).filter(|s| !s.is_empty()))
        .map(str::to_string)
        .ok_or_else(|| CoreError::Validation(ID_REQUIRED_MESSAGE.to_string()))
}

/// The `id` query value. Repeated keys are joined with `,`, so
/// `?id=a&id=b` names the asset `"a,b"`.
pub fn query_id(pairs: &[(String, String)]) -> Option<String> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == "id")
        .map(|(_, value)| value.as_str())
        .collect();
    (!values.is_empty()).then(|| values.join(","))
}

/// Generate a new opaque asset id (UUID v4, hyphenated).
pub fn generate_asset_id() -> AssetId {
    uuid::Uuid::new_v4().to_string()
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp (keeping its date part).
fn parse_date(value: Option<&str>) -> Result<Option<Date>, CoreError> {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(date) = Date::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.date_naive()));
    }

    Err(CoreError::Validation(INVALID_DATE_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn payload(value: serde_json::Value) -> AssetPayload {
        parse_payload(value.to_string().as_bytes()).unwrap()
    }

    // -- Decoding ------------------------------------------------------------

    #[test]
    fn empty_body_decodes_to_empty_payload() {
        assert_eq!(parse_payload(b"").unwrap(), AssetPayload::default());
    }

    #[test]
    fn malformed_json_decodes_to_empty_payload() {
        assert_eq!(parse_payload(b"{tur: ").unwrap(), AssetPayload::default());
    }

    #[test]
    fn non_object_json_decodes_to_empty_payload() {
        assert_eq!(parse_payload(b"[1, 2]").unwrap(), AssetPayload::default());
        assert_eq!(parse_payload(b"\"Laptop\"").unwrap(), AssetPayload::default());
    }

    #[test]
    fn numbers_and_booleans_are_coerced_to_text() {
        let p = payload(json!({ "seri": 12345, "durum": true }));
        assert_eq!(p.seri.as_deref(), Some("12345"));
        assert_eq!(p.durum.as_deref(), Some("true"));
    }

    #[test]
    fn nested_values_are_rejected() {
        let result = parse_payload(json!({ "tur": ["Laptop"] }).to_string().as_bytes());
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let p = payload(json!({ "tur": "Laptop", "updated_at": "2020-01-01", "extra": {} }));
        assert_eq!(p.tur.as_deref(), Some("Laptop"));
    }

    // -- Normalization -------------------------------------------------------

    #[test]
    fn normalize_trims_fields_and_generates_id() {
        let asset = payload(json!({
            "tur": "  Laptop ",
            "model": "X1",
            "seri": "SN1\n",
            "atanan": " Ayşe ",
        }))
        .normalize()
        .unwrap();

        assert_eq!(asset.tur, "Laptop");
        assert_eq!(asset.seri, "SN1");
        assert_eq!(asset.atanan.as_deref(), Some("Ayşe"));
        assert!(uuid::Uuid::parse_str(&asset.id).is_ok());
    }

    #[test]
    fn normalize_keeps_supplied_id() {
        let asset = payload(json!({ "id": " a-1 ", "tur": "T", "model": "M", "seri": "S" }))
            .normalize()
            .unwrap();
        assert_eq!(asset.id, "a-1");
    }

    #[test]
    fn blank_id_is_replaced() {
        let asset = payload(json!({ "id": "   ", "tur": "T", "model": "M", "seri": "S" }))
            .normalize()
            .unwrap();
        assert!(!asset.id.trim().is_empty());
    }

    #[test]
    fn empty_optional_fields_become_none() {
        let asset = payload(json!({
            "tur": "T", "model": "M", "seri": "S",
            "durum": "  ", "konum": "", "not": null,
        }))
        .normalize()
        .unwrap();

        assert_eq!(asset.durum, None);
        assert_eq!(asset.konum, None);
        assert_eq!(asset.not, None);
        assert_eq!(asset.tarih, None);
    }

    #[test]
    fn missing_required_field_fails() {
        for body in [
            json!({ "model": "M", "seri": "S" }),
            json!({ "tur": "T", "seri": "S" }),
            json!({ "tur": "T", "model": "M", "seri": "   " }),
        ] {
            assert_matches!(
                payload(body).normalize(),
                Err(CoreError::Validation(msg)) if msg == REQUIRED_FIELDS_MESSAGE
            );
        }
    }

    #[test]
    fn required_fields_are_checked_before_date() {
        assert_matches!(
            payload(json!({ "tarih": "not a date" })).normalize(),
            Err(CoreError::Validation(msg)) if msg == REQUIRED_FIELDS_MESSAGE
        );
    }

    #[test]
    fn date_accepts_plain_and_rfc3339_forms() {
        let plain = payload(json!({ "tur": "T", "model": "M", "seri": "S", "tarih": "2024-03-15" }))
            .normalize()
            .unwrap();
        assert_eq!(plain.tarih, Date::from_ymd_opt(2024, 3, 15));

        let stamped = payload(json!({
            "tur": "T", "model": "M", "seri": "S", "tarih": "2024-03-15T10:00:00Z",
        }))
        .normalize()
        .unwrap();
        assert_eq!(stamped.tarih, Date::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn invalid_date_fails() {
        assert_matches!(
            payload(json!({ "tur": "T", "model": "M", "seri": "S", "tarih": "15/03/2024" }))
                .normalize(),
            Err(CoreError::Validation(msg)) if msg == INVALID_DATE_MESSAGE
        );
    }

    // -- Delete target -------------------------------------------------------

    #[test]
    fn delete_prefers_query_id() {
        let body = payload(json!({ "id": "from-body" }));
        assert_eq!(delete_target(Some(" from-query "), &body).unwrap(), "from-query");
    }

    #[test]
    fn delete_falls_back_to_body_id() {
        let body = payload(json!({ "id": "from-body" }));
        assert_eq!(delete_target(None, &body).unwrap(), "from-body");
        assert_eq!(delete_target(Some("  "), &body).unwrap(), "from-body");
    }

    #[test]
    fn delete_without_id_fails() {
        assert_matches!(
            delete_target(None, &AssetPayload::default()),
            Err(CoreError::Validation(msg)) if msg == ID_REQUIRED_MESSAGE
        );
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn query_id_joins_repeated_values() {
        assert_eq!(query_id(&pairs(&[("id", "a")])).as_deref(), Some("a"));
        assert_eq!(
            query_id(&pairs(&[("id", "a"), ("x", "1"), ("id", "b")])).as_deref(),
            Some("a,b")
        );
        assert_eq!(query_id(&pairs(&[("x", "1")])), None);
    }
}
