//! `/health`: liveness plus a schema readiness report.
//!
//! `status` is `"ok"` only when the database answers and the `assets` table
//! exists. A reachable database without the table (migrations never ran, or
//! the table was dropped) reports `"degraded"`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use envanter_db::SchemaStatus;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    /// `CARGO_PKG_VERSION` of the API crate.
    pub version: &'static str,
    /// `SELECT 1` succeeded.
    pub db_healthy: bool,
    /// The `assets` table is present.
    pub schema_ready: bool,
    /// Successful entries in the migration ledger.
    pub migrations_applied: i64,
}

impl HealthReport {
    fn new(db_healthy: bool, schema: Option<SchemaStatus>) -> Self {
        let schema_ready = schema.is_some_and(|s| s.assets_table);
        Self {
            status: if db_healthy && schema_ready { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            schema_ready,
            migrations_applied: schema.map_or(0, |s| s.applied_migrations),
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = envanter_db::health_check(&state.pool).await.is_ok();

    let schema = if db_healthy {
        match envanter_db::schema_status(&state.pool).await {
            Ok(schema) => Some(schema),
            Err(e) => {
                tracing::warn!(error = %e, "Schema inspection failed");
                None
            }
        }
    } else {
        None
    };

    Json(HealthReport::new(db_healthy, schema))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_database_is_degraded() {
        let report = HealthReport::new(false, None);
        assert_eq!(report.status, "degraded");
        assert!(!report.schema_ready);
        assert_eq!(report.migrations_applied, 0);
    }

    #[test]
    fn missing_table_is_degraded_even_with_migrations() {
        let schema = SchemaStatus {
            assets_table: false,
            applied_migrations: 1,
        };
        let report = HealthReport::new(true, Some(schema));
        assert_eq!(report.status, "degraded");
        assert_eq!(report.migrations_applied, 1);
    }

    #[test]
    fn reachable_database_with_table_is_ok() {
        let schema = SchemaStatus {
            assets_table: true,
            applied_migrations: 1,
        };
        assert_eq!(HealthReport::new(true, Some(schema)).status, "ok");
    }
}
