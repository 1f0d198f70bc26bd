//! Handlers for the `/equipment` resource and its tag associations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use camerapedia_core::equipment::{validate_production_years, EquipmentType};
use camerapedia_core::error::CoreError;
use camerapedia_core::fields::{missing_fields, non_blank};
use camerapedia_core::types::DbId;
use camerapedia_db::models::equipment::{
    CreateEquipment, EquipmentDetail, EquipmentWithRelations, NewEquipment,
};
use camerapedia_db::models::specification::SpecificationValueWithDefinition;
use camerapedia_db::models::tag::{AttachTagsRequest, TagInfo};
use camerapedia_db::repositories::{
    BrandRepo, EquipmentRepo, MountRepo, SpecValueRepo, TagRepo,
};
use camerapedia_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_valid_id;
use crate::state::AppState;

/// POST /api/equipment
///
/// Validates referenced brand, mount, and tags before inserting so that a
/// bad reference is reported as a 400 with a readable message.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<EquipmentWithRelations>)> {
    let new_equipment = validate_new_equipment(input)?;

    if BrandRepo::find_by_id(&state.pool, new_equipment.brand_id)
        .await?
        .is_none()
    {
        return Err(CoreError::Validation(format!(
            "Brand with id {} does not exist",
            new_equipment.brand_id
        ))
        .into());
    }
    if let Some(mount_id) = new_equipment.mount_id {
        if MountRepo::find_by_id(&state.pool, mount_id).await?.is_none() {
            return Err(
                CoreError::Validation(format!("Mount with id {mount_id} does not exist")).into(),
            );
        }
    }
    ensure_tags_exist(&state.pool, &new_equipment.tag_ids).await?;

    let equipment = EquipmentRepo::create(&state.pool, &new_equipment).await?;

    tracing::info!(
        equipment_id = equipment.id,
        brand_id = equipment.brand_id,
        equipment_type = %equipment.equipment_type,
        "Equipment created",
    );

    let item = EquipmentRepo::find_with_relations(&state.pool, equipment.id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "Equipment {} vanished after creation",
                equipment.id
            ))
        })?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/equipment
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EquipmentWithRelations>>> {
    let items = EquipmentRepo::list_with_relations(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/equipment/{id}
///
/// Returns the item with its relations and every specification value.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EquipmentDetail>> {
    ensure_valid_id(id)?;

    let item = EquipmentRepo::find_with_relations(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id,
        }))?;

    let specifications = SpecValueRepo::list_for_equipment(&state.pool, id)
        .await?
        .into_iter()
        .map(SpecificationValueWithDefinition::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(EquipmentDetail {
        item,
        specifications,
    }))
}

/// POST /api/equipment/{id}/tags
///
/// Applies existing tags; tags already applied are left as they are.
/// Returns the item's full tag list.
pub async fn attach_tags(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AttachTagsRequest>,
) -> AppResult<(StatusCode, Json<Vec<TagInfo>>)> {
    ensure_valid_id(id)?;
    ensure_equipment_exists(&state.pool, id).await?;

    let tag_ids = dedup_ids(input.tag_ids);
    if tag_ids.is_empty() {
        return Err(CoreError::missing("tagIds").into());
    }
    ensure_tags_exist(&state.pool, &tag_ids).await?;

    let attached = TagRepo::attach(&state.pool, id, &tag_ids).await?;
    tracing::info!(equipment_id = id, attached, "Tags attached to equipment");

    let tags = TagRepo::list_for_equipment(&state.pool, id).await?;
    Ok((StatusCode::CREATED, Json(tags)))
}

/// DELETE /api/equipment/{id}/tags/{tag_id}
pub async fn detach_tag(
    State(state): State<AppState>,
    Path((id, tag_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_valid_id(id)?;
    ensure_valid_id(tag_id)?;

    if TagRepo::detach(&state.pool, id, tag_id).await? {
        tracing::info!(equipment_id = id, tag_id, "Tag detached from equipment");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "EquipmentTag",
            id: tag_id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Return 404 unless the equipment item exists.
pub(crate) async fn ensure_equipment_exists(pool: &DbPool, id: DbId) -> AppResult<()> {
    match EquipmentRepo::find_by_id(pool, id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id,
        })),
    }
}

/// Reject any tag ID that does not exist, naming the unknown ones.
async fn ensure_tags_exist(pool: &DbPool, tag_ids: &[DbId]) -> AppResult<()> {
    if tag_ids.is_empty() {
        return Ok(());
    }

    let existing = TagRepo::find_existing_ids(pool, tag_ids).await?;
    let unknown: Vec<String> = tag_ids
        .iter()
        .filter(|id| !existing.contains(id))
        .map(ToString::to_string)
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Unknown tag ids: {}", unknown.join(", "))).into())
    }
}

fn dedup_ids(ids: Vec<DbId>) -> Vec<DbId> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

/// Check required fields and local invariants of an equipment create request.
///
/// References (brand, mount, tags) are checked against the database by the
/// caller.
fn validate_new_equipment(input: CreateEquipment) -> Result<NewEquipment, CoreError> {
    let base_model_name = non_blank(input.base_model_name);
    let equipment_type = non_blank(input.equipment_type);

    let (brand_id, base_model_name, equipment_type) =
        match (input.brand_id, base_model_name, equipment_type) {
            (Some(brand_id), Some(name), Some(equipment_type)) => {
                (brand_id, name, equipment_type)
            }
            (brand_id, name, equipment_type) => {
                return Err(missing_fields(&[
                    ("brandId", brand_id.is_some()),
                    ("baseModelName", name.is_some()),
                    ("equipmentType", equipment_type.is_some()),
                ]))
            }
        };

    let equipment_type =
        EquipmentType::from_str_value(&equipment_type).map_err(CoreError::Validation)?;
    validate_production_years(input.production_start_year, input.production_end_year)?;

    Ok(NewEquipment {
        brand_id,
        base_model_name,
        version_identifier: non_blank(input.version_identifier),
        production_start_year: input.production_start_year,
        production_end_year: input.production_end_year,
        equipment_type,
        main_image_url: non_blank(input.main_image_url),
        description: non_blank(input.description),
        mount_id: input.mount_id,
        tag_ids: dedup_ids(input.tag_ids),
    })
}
