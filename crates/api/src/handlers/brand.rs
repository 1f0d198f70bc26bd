//! Handlers for the `/brands` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use camerapedia_core::fields::{non_blank, require_text};
use camerapedia_db::models::brand::{Brand, CreateBrand};
use camerapedia_db::repositories::BrandRepo;

use crate::error::AppResult;
use crate::handlers::duplicate_as_conflict;
use crate::state::AppState;

/// POST /api/brands
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBrand>,
) -> AppResult<(StatusCode, Json<Brand>)> {
    let name = require_text("name", input.name)?;
    let country_of_origin = non_blank(input.country_of_origin);
    let logo_url = non_blank(input.logo_url);

    let brand = BrandRepo::create(
        &state.pool,
        &name,
        country_of_origin.as_deref(),
        logo_url.as_deref(),
    )
    .await
    .map_err(|e| duplicate_as_conflict(e, || format!("A brand named '{name}' already exists")))?;

    tracing::info!(brand_id = brand.id, name = %brand.name, "Brand created");

    Ok((StatusCode::CREATED, Json(brand)))
}

/// GET /api/brands
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Brand>>> {
    let brands = BrandRepo::list(&state.pool).await?;
    Ok(Json(brands))
}
