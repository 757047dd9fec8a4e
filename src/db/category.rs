use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

/// Outcome of a conditional category delete.
#[derive(Debug, PartialEq)]
pub enum CategoryDeletion {
    Deleted,
    NotFound,
    /// Blocked; carries the number of components still referencing the name.
    InUse(i64),
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Category>, String> {
    let query_span = tracing::info_span!("Fetch all categories.");
    sqlx::query_as::<_, models::Category>(
        r#"
        SELECT id, name, created_at
        FROM category
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch categories, error: {:?}", err);
        "Failed to fetch categories".to_string()
    })
}

/// Inserts a category; `None` means the unique name already existed.
pub async fn insert(pool: &PgPool, name: &str) -> Result<Option<models::Category>, String> {
    let query_span = tracing::info_span!("Saving new category into the database");
    sqlx::query_as::<_, models::Category>(
        r#"
        INSERT INTO category (name, created_at)
        VALUES ($1, NOW())
        ON CONFLICT (name) DO NOTHING
        RETURNING id, name, created_at
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert category, error: {:?}", err);
        "Failed to insert category".to_string()
    })
}

/// Creates the category record if a category with that name does not yet
/// exist. Used as a side effect of component creation.
pub async fn ensure(pool: &PgPool, name: &str) -> Result<(), String> {
    let query_span = tracing::info_span!("Ensuring category exists");
    sqlx::query(
        r#"
        INSERT INTO category (name, created_at)
        VALUES ($1, NOW())
        ON CONFLICT (name) DO NOTHING
        "#,
    )
    .bind(name)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Failed to ensure category {}, error: {:?}", name, err);
        "Failed to create category".to_string()
    })
}

/// Conditional delete: counts referencing components and deletes inside one
/// transaction, so a component created concurrently cannot slip between the
/// count and the delete.
#[tracing::instrument(name = "Delete category.", skip(pool))]
pub async fn delete(pool: &PgPool, name: &str) -> Result<CategoryDeletion, String> {
    let mut tx = pool.begin().await.map_err(|err| {
        tracing::error!("Failed to begin transaction: {:?}", err);
        "Failed to delete category".to_string()
    })?;

    let referencing = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM component WHERE category = $1",
    )
    .bind(name)
    .fetch_one(&mut *tx)
    .await
    .map_err(|err| {
        tracing::error!("Failed to count components for {}, error: {:?}", name, err);
        "Failed to delete category".to_string()
    })?;

    if referencing > 0 {
        let _ = tx.rollback().await;
        return Ok(CategoryDeletion::InUse(referencing));
    }

    let result = sqlx::query("DELETE FROM category WHERE name = $1")
        .bind(name)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            tracing::error!("Failed to delete category {}, error: {:?}", name, err);
            "Failed to delete category".to_string()
        })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit transaction: {:?}", err);
        "Failed to delete category".to_string()
    })?;

    if result.rows_affected() == 0 {
        Ok(CategoryDeletion::NotFound)
    } else {
        Ok(CategoryDeletion::Deleted)
    }
}
