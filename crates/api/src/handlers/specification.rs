//! Handlers for specification values nested under `/equipment/{id}`.
//!
//! A value is accepted only when its definition applies to the equipment's
//! type and the raw input coerces to the definition's declared value type.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use camerapedia_core::error::CoreError;
use camerapedia_core::fields::missing_fields;
use camerapedia_core::specification::{
    check_applicability, coerce_value, raw_value_missing, RawSpecValue,
};
use camerapedia_core::types::DbId;
use camerapedia_db::models::specification::{
    CreateSpecificationValue, SpecificationValue, SpecificationValueWithDefinition,
};
use camerapedia_db::repositories::{EquipmentRepo, SpecDefinitionRepo, SpecValueRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::equipment::ensure_equipment_exists;
use crate::handlers::{duplicate_as_conflict, ensure_valid_id};
use crate::state::AppState;

/// POST /api/equipment/{id}/specifications
pub async fn create(
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
    Json(input): Json<CreateSpecificationValue>,
) -> AppResult<(StatusCode, Json<SpecificationValueWithDefinition>)> {
    ensure_valid_id(equipment_id)?;

    let raw = input.value.and_then(RawSpecValue::from_json);
    let spec_definition_id = match input.spec_definition_id {
        Some(id) if !raw_value_missing(raw.as_ref()) => id,
        id => {
            return Err(missing_fields(&[
                ("specDefinitionId", id.is_some()),
                ("value", !raw_value_missing(raw.as_ref())),
            ])
            .into())
        }
    };

    let equipment = EquipmentRepo::find_by_id(&state.pool, equipment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id: equipment_id,
        }))?;
    let definition = SpecDefinitionRepo::find_by_id(&state.pool, spec_definition_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SpecificationDefinition",
            id: spec_definition_id,
        }))?;

    let value_type = definition.parsed_value_type()?;
    check_applicability(
        equipment.parsed_equipment_type()?,
        &definition.parsed_applicable_to()?,
        &definition.spec_key,
    )?;
    let value = coerce_value(raw, value_type)?;

    let conflict_message = || {
        format!(
            "Equipment {equipment_id} already has a value for '{}'",
            definition.spec_key
        )
    };
    if SpecValueRepo::find_by_pair(&state.pool, equipment_id, spec_definition_id)
        .await?
        .is_some()
    {
        return Err(CoreError::Conflict(conflict_message()).into());
    }

    // A concurrent insert can still win between the check and the insert;
    // the unique constraint reports it as the same conflict.
    let row = SpecValueRepo::create(&state.pool, equipment_id, spec_definition_id, &value)
        .await
        .map_err(|e| duplicate_as_conflict(e, conflict_message))?;
    let stored = SpecificationValue::from_row(row, value_type)?;

    tracing::info!(
        specification_value_id = stored.id,
        equipment_id,
        spec_key = %definition.spec_key,
        value_type = %value_type,
        "Specification value created",
    );

    Ok((
        StatusCode::CREATED,
        Json(SpecificationValueWithDefinition {
            value: stored,
            spec_definition: definition,
        }),
    ))
}

/// GET /api/equipment/{id}/specifications
pub async fn list(
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
) -> AppResult<Json<Vec<SpecificationValueWithDefinition>>> {
    ensure_valid_id(equipment_id)?;
    ensure_equipment_exists(&state.pool, equipment_id).await?;

    let values = SpecValueRepo::list_for_equipment(&state.pool, equipment_id)
        .await?
        .into_iter()
        .map(SpecificationValueWithDefinition::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(values))
}

/// DELETE /api/equipment/{id}/specifications/{value_id}
///
/// Only removes the value when it belongs to the equipment in the path.
pub async fn delete(
    State(state): State<AppState>,
    Path((equipment_id, value_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_valid_id(equipment_id)?;
    ensure_valid_id(value_id)?;

    if SpecValueRepo::delete(&state.pool, equipment_id, value_id).await? {
        tracing::info!(
            specification_value_id = value_id,
            equipment_id,
            "Specification value deleted",
        );
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "SpecificationValue",
            id: value_id,
        }))
    }
}
