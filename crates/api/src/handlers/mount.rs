//! Handlers for the `/mounts` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use camerapedia_core::fields::{non_blank, require_text};
use camerapedia_db::models::mount::{CreateMount, Mount};
use camerapedia_db::repositories::MountRepo;

use crate::error::AppResult;
use crate::handlers::duplicate_as_conflict;
use crate::state::AppState;

/// POST /api/mounts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMount>,
) -> AppResult<(StatusCode, Json<Mount>)> {
    let name = require_text("name", input.name)?;
    let mount_type = non_blank(input.mount_type);
    let description = non_blank(input.description);

    let mount = MountRepo::create(
        &state.pool,
        &name,
        mount_type.as_deref(),
        description.as_deref(),
    )
    .await
    .map_err(|e| duplicate_as_conflict(e, || format!("A mount named '{name}' already exists")))?;

    tracing::info!(mount_id = mount.id, name = %mount.name, "Mount created");

    Ok((StatusCode::CREATED, Json(mount)))
}

/// GET /api/mounts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Mount>>> {
    let mounts = MountRepo::list(&state.pool).await?;
    Ok(Json(mounts))
}
