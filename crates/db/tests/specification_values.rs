//! Repository-level tests for specification definitions and values.

use assert_matches::assert_matches;
use camerapedia_core::equipment::EquipmentType;
use camerapedia_core::error::CoreError;
use camerapedia_core::specification::{SpecValue, SpecValueType};
use camerapedia_db::models::equipment::NewEquipment;
use camerapedia_db::models::specification::{
    NewSpecDefinition, SpecificationValue, SpecificationValueWithDefinition,
};
use camerapedia_db::repositories::{
    BrandRepo, EquipmentRepo, SpecDefinitionRepo, SpecValueRepo,
};
use sqlx::PgPool;

async fn seed_lens(pool: &PgPool) -> i64 {
    seed_lens_named(pool, "Zeiss", "Sonnar 85mm").await
}

async fn seed_lens_named(pool: &PgPool, brand_name: &str, name: &str) -> i64 {
    let brand = BrandRepo::create(pool, brand_name, None, None).await.unwrap();
    let lens = EquipmentRepo::create(
        pool,
        &NewEquipment {
            brand_id: brand.id,
            base_model_name: name.into(),
            version_identifier: None,
            production_start_year: None,
            production_end_year: None,
            equipment_type: EquipmentType::Lens,
            main_image_url: None,
            description: None,
            mount_id: None,
            tag_ids: vec![],
        },
    )
    .await
    .unwrap();
    lens.id
}

async fn seed_definition(pool: &PgPool, spec_key: &str, value_type: SpecValueType) -> i64 {
    SpecDefinitionRepo::create(
        pool,
        &NewSpecDefinition {
            spec_key: spec_key.into(),
            display_name: spec_key.into(),
            value_type,
            applicable_to: vec![EquipmentType::Lens, EquipmentType::CameraBody],
            unit: None,
            description: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_definition_round_trips_applicable_to(pool: PgPool) {
    let id = seed_definition(&pool, "filter_thread", SpecValueType::Float).await;

    let definition = SpecDefinitionRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(definition.value_type, "FLOAT");
    assert_eq!(
        definition.parsed_applicable_to().unwrap(),
        vec![EquipmentType::Lens, EquipmentType::CameraBody]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_value_populates_only_matching_column(pool: PgPool) {
    let lens_id = seed_lens(&pool).await;
    let definition_id = seed_definition(&pool, "elements", SpecValueType::Int).await;

    let row = SpecValueRepo::create(&pool, lens_id, definition_id, &SpecValue::Int(7))
        .await
        .unwrap();
    assert_eq!(row.int_value, Some(7));
    assert_eq!(row.string_value, None);
    assert_eq!(row.float_value, None);
    assert_eq!(row.boolean_value, None);

    let value = SpecificationValue::from_row(row, SpecValueType::Int).unwrap();
    assert_eq!(value.value, SpecValue::Int(7));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_row_of_wrong_type_is_internal_error(pool: PgPool) {
    let lens_id = seed_lens(&pool).await;
    let definition_id = seed_definition(&pool, "elements", SpecValueType::Int).await;

    let row = SpecValueRepo::create(&pool, lens_id, definition_id, &SpecValue::Int(7))
        .await
        .unwrap();
    assert_matches!(
        SpecificationValue::from_row(row, SpecValueType::Float),
        Err(CoreError::Internal(_))
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_single_value_check_rejects_two_columns(pool: PgPool) {
    let lens_id = seed_lens(&pool).await;
    let definition_id = seed_definition(&pool, "coated", SpecValueType::Boolean).await;

    let result = sqlx::query(
        "INSERT INTO specification_values \
            (equipment_id, spec_definition_id, int_value, boolean_value) \
         VALUES ($1, $2, 1, true)",
    )
    .bind(lens_id)
    .bind(definition_id)
    .execute(&pool)
    .await;

    let err = result.unwrap_err();
    let db_err = err.as_database_error().unwrap();
    assert_eq!(db_err.constraint(), Some("ck_specification_values_single_value"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_pair_is_unique_violation(pool: PgPool) {
    let lens_id = seed_lens(&pool).await;
    let definition_id = seed_definition(&pool, "mount_thread", SpecValueType::String).await;

    SpecValueRepo::create(&pool, lens_id, definition_id, &SpecValue::String("M42".into()))
        .await
        .unwrap();
    let err = SpecValueRepo::create(&pool, lens_id, definition_id, &SpecValue::String("M39".into()))
        .await
        .unwrap_err();

    assert!(camerapedia_db::is_unique_violation(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_equipment_is_foreign_key_violation(pool: PgPool) {
    let definition_id = seed_definition(&pool, "weight_g", SpecValueType::Int).await;

    let err = SpecValueRepo::create(&pool, 999_999, definition_id, &SpecValue::Int(300))
        .await
        .unwrap_err();

    assert!(camerapedia_db::is_foreign_key_violation(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_equipment_joins_definitions_in_insertion_order(pool: PgPool) {
    let lens_id = seed_lens(&pool).await;
    let aperture_id = seed_definition(&pool, "aperture", SpecValueType::Float).await;
    let coated_id = seed_definition(&pool, "coated", SpecValueType::Boolean).await;

    SpecValueRepo::create(&pool, lens_id, coated_id, &SpecValue::Boolean(false))
        .await
        .unwrap();
    SpecValueRepo::create(&pool, lens_id, aperture_id, &SpecValue::Float(1.4))
        .await
        .unwrap();

    let values: Vec<SpecificationValueWithDefinition> =
        SpecValueRepo::list_for_equipment(&pool, lens_id)
            .await
            .unwrap()
            .into_iter()
            .map(|row| row.try_into().unwrap())
            .collect();

    assert_eq!(values.len(), 2);
    assert_eq!(values[0].spec_definition.spec_key, "coated");
    assert_eq!(values[0].value.value, SpecValue::Boolean(false));
    assert_eq!(values[1].spec_definition.spec_key, "aperture");
    assert_eq!(values[1].value.value, SpecValue::Float(1.4));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_is_scoped_to_equipment(pool: PgPool) {
    let lens_id = seed_lens(&pool).await;
    let definition_id = seed_definition(&pool, "aperture", SpecValueType::Float).await;
    let row = SpecValueRepo::create(&pool, lens_id, definition_id, &SpecValue::Float(2.0))
        .await
        .unwrap();

    assert!(!SpecValueRepo::delete(&pool, lens_id + 1, row.id).await.unwrap());
    assert!(SpecValueRepo::delete(&pool, lens_id, row.id).await.unwrap());
    assert!(SpecValueRepo::find_by_pair(&pool, lens_id, definition_id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_equipment_cascades_values(pool: PgPool) {
    let lens_id = seed_lens(&pool).await;
    let definition_id = seed_definition(&pool, "aperture", SpecValueType::Float).await;
    SpecValueRepo::create(&pool, lens_id, definition_id, &SpecValue::Float(2.0))
        .await
        .unwrap();

    sqlx::query("DELETE FROM equipment WHERE id = $1")
        .bind(lens_id)
        .execute(&pool)
        .await
        .unwrap();

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM specification_values")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_exactly_one_row(pool: PgPool) {
    let lens_id = seed_lens(&pool).await;
    let other_lens_id = seed_lens_named(&pool, "Voigtlander", "Color-Skopar 21mm").await;
    let aperture_id = seed_definition(&pool, "aperture", SpecValueType::Float).await;
    let coated_id = seed_definition(&pool, "coated", SpecValueType::Boolean).await;

    let aperture = SpecValueRepo::create(&pool, lens_id, aperture_id, &SpecValue::Float(2.0))
        .await
        .unwrap();
    let coated = SpecValueRepo::create(&pool, lens_id, coated_id, &SpecValue::Boolean(true))
        .await
        .unwrap();
    let other = SpecValueRepo::create(&pool, other_lens_id, aperture_id, &SpecValue::Float(4.5))
        .await
        .unwrap();

    assert!(SpecValueRepo::delete(&pool, lens_id, aperture.id).await.unwrap());

    let remaining = SpecValueRepo::find_by_pair(&pool, lens_id, coated_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(remaining.id, coated.id);
    assert_eq!(remaining.boolean_value, Some(true));

    let remaining = SpecValueRepo::find_by_pair(&pool, other_lens_id, aperture_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(remaining.id, other.id);
    assert_eq!(remaining.float_value, Some(4.5));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM specification_values")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}
