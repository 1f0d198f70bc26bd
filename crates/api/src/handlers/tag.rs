//! Handlers for the `/tags` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use camerapedia_core::fields::require_text;
use camerapedia_db::models::tag::{CreateTag, Tag};
use camerapedia_db::repositories::TagRepo;

use crate::error::AppResult;
use crate::handlers::duplicate_as_conflict;
use crate::state::AppState;

/// POST /api/tags
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<(StatusCode, Json<Tag>)> {
    let name = require_text("name", input.name)?;

    let tag = TagRepo::create(&state.pool, &name)
        .await
        .map_err(|e| duplicate_as_conflict(e, || format!("A tag named '{name}' already exists")))?;

    tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");

    Ok((StatusCode::CREATED, Json(tag)))
}

/// GET /api/tags
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Tag>>> {
    let tags = TagRepo::list(&state.pool).await?;
    Ok(Json(tags))
}
