use crate::models;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Component>, String> {
    let query_span = tracing::info_span!("Fetch all components.");
    sqlx::query_as::<_, models::Component>(
        r#"
        SELECT id, name, category, description, variants, created_at, updated_at
        FROM component
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch components, error: {:?}", err);
        "Failed to fetch components".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Component>, String> {
    let query_span = tracing::info_span!("Fetch component by id.");
    sqlx::query_as::<_, models::Component>(
        r#"
        SELECT id, name, category, description, variants, created_at, updated_at
        FROM component
        WHERE id = $1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch component {}, error: {:?}", id, err);
        "Failed to fetch component".to_string()
    })
}

pub async fn fetch_by_category(
    pool: &PgPool,
    category: &str,
) -> Result<Vec<models::Component>, String> {
    let query_span = tracing::info_span!("Fetch components by category.");
    sqlx::query_as::<_, models::Component>(
        r#"
        SELECT id, name, category, description, variants, created_at, updated_at
        FROM component
        WHERE category = $1
        ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!(
            "Failed to fetch components by category {}, error: {:?}",
            category,
            err
        );
        "Failed to fetch components by category".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    component: models::Component,
) -> Result<models::Component, String> {
    let query_span = tracing::info_span!("Saving new component into the database");
    sqlx::query_as::<_, models::Component>(
        r#"
        INSERT INTO component (name, category, description, variants, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW(), NOW())
        RETURNING id, name, category, description, variants, created_at, updated_at
        "#,
    )
    .bind(component.name)
    .bind(component.category)
    .bind(component.description)
    .bind(component.variants)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert component, error: {:?}", err);
        "Failed to insert component".to_string()
    })
}

/// Writes back the scalar fields only; `updated_at` is always refreshed, even
/// when nothing else changed.
pub async fn update(
    pool: &PgPool,
    component: models::Component,
) -> Result<models::Component, String> {
    let query_span = tracing::info_span!("Updating component");
    sqlx::query_as::<_, models::Component>(
        r#"
        UPDATE component
        SET
            name = $2,
            category = $3,
            description = $4,
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, category, description, variants, created_at, updated_at
        "#,
    )
    .bind(component.id)
    .bind(component.name)
    .bind(component.category)
    .bind(component.description)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to update component, error: {:?}", err);
        "Failed to update component".to_string()
    })
}

/// Replaces the whole embedded variant array and touches the parent's
/// `updated_at`. Returns `None` when the component row is gone.
pub async fn update_variants(
    pool: &PgPool,
    id: i32,
    variants: &[models::Variant],
) -> Result<Option<models::Component>, String> {
    let query_span = tracing::info_span!("Updating component variants");
    sqlx::query_as::<_, models::Component>(
        r#"
        UPDATE component
        SET variants = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, category, description, variants, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(Json(variants))
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!(
            "Failed to update variants of component {}, error: {:?}",
            id,
            err
        );
        "Failed to update variants".to_string()
    })
}

#[tracing::instrument(name = "Delete component.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query("DELETE FROM component WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete component {}, error: {:?}", id, err);
            "Failed to delete component".to_string()
        })
}
