use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{error::Result, state::AppState};

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>> {
    state.db.ping().await?;

    let migrations = if state.config.run_migrations {
        "on_startup"
    } else {
        "external"
    };

    Ok(Json(json!({
        "status": "ok",
        "database": "connected",
        "migrations": migrations,
    })))
}
