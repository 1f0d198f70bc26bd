//! Handlers for the `/specification-definitions` resource.
//!
//! Definitions are created once and never updated; each declares the value
//! type every attached specification value must have.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use camerapedia_core::equipment::parse_equipment_types;
use camerapedia_core::error::CoreError;
use camerapedia_core::fields::{missing_fields, non_blank};
use camerapedia_core::specification::SpecValueType;
use camerapedia_core::types::DbId;
use camerapedia_db::models::specification::{
    CreateSpecDefinition, NewSpecDefinition, SpecDefinition,
};
use camerapedia_db::repositories::SpecDefinitionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{duplicate_as_conflict, ensure_valid_id};
use crate::state::AppState;

/// POST /api/specification-definitions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSpecDefinition>,
) -> AppResult<(StatusCode, Json<SpecDefinition>)> {
    let new_definition = validate_new_definition(input)?;

    let definition = SpecDefinitionRepo::create(&state.pool, &new_definition)
        .await
        .map_err(|e| {
            duplicate_as_conflict(e, || {
                format!(
                    "A specification definition with key '{}' already exists",
                    new_definition.spec_key
                )
            })
        })?;

    tracing::info!(
        spec_definition_id = definition.id,
        spec_key = %definition.spec_key,
        value_type = %definition.value_type,
        "Specification definition created",
    );

    Ok((StatusCode::CREATED, Json(definition)))
}

/// GET /api/specification-definitions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SpecDefinition>>> {
    let definitions = SpecDefinitionRepo::list(&state.pool).await?;
    Ok(Json(definitions))
}

/// GET /api/specification-definitions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SpecDefinition>> {
    ensure_valid_id(id)?;

    let definition = SpecDefinitionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SpecificationDefinition",
            id,
        }))?;
    Ok(Json(definition))
}

/// Check required fields and parse the declared types.
///
/// All missing fields are reported together; type errors are reported only
/// once every required field is present.
fn validate_new_definition(input: CreateSpecDefinition) -> Result<NewSpecDefinition, CoreError> {
    let spec_key = non_blank(input.spec_key);
    let display_name = non_blank(input.display_name);
    let value_type = non_blank(input.value_type);

    match (spec_key, display_name, value_type, input.applicable_to) {
        (Some(spec_key), Some(display_name), Some(value_type), Some(applicable_to)) => {
            let value_type =
                SpecValueType::from_str_value(&value_type).map_err(CoreError::Validation)?;
            let applicable_to = parse_equipment_types(&applicable_to)?;

            Ok(NewSpecDefinition {
                spec_key,
                display_name,
                value_type,
                applicable_to,
                unit: non_blank(input.unit),
                description: non_blank(input.description),
            })
        }
        (spec_key, display_name, value_type, applicable_to) => Err(missing_fields(&[
            ("specKey", spec_key.is_some()),
            ("displayName", display_name.is_some()),
            ("valueType", value_type.is_some()),
            ("applicableTo", applicable_to.is_some()),
        ])),
    }
}
