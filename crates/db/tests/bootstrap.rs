use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify the schema exists.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    camerapedia_db::health_check(&pool).await.unwrap();

    let tables = [
        "brands",
        "mounts",
        "tags",
        "equipment",
        "equipment_tags",
        "specification_definitions",
        "specification_values",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// `updated_at` is bumped by the shared trigger on UPDATE.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updated_at_trigger(pool: PgPool) {
    let brand = camerapedia_db::repositories::BrandRepo::create(&pool, "Yashica", None, None)
        .await
        .unwrap();

    let (updated_at,): (chrono::DateTime<chrono::Utc>,) = sqlx::query_as(
        "UPDATE brands SET country_of_origin = 'Japan' WHERE id = $1 RETURNING updated_at",
    )
    .bind(brand.id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert!(updated_at >= brand.updated_at);
}
