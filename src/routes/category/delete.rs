use crate::db;
use crate::db::category::CategoryDeletion;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Delete category.", skip(pg_pool))]
#[delete("/{name}")]
pub async fn item(path: web::Path<(String,)>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let (name,) = path.into_inner();

    db::category::delete(pg_pool.get_ref(), &name)
        .await
        .map_err(|err| JsonResponse::<models::Category>::build().internal_server_error(&err))
        .and_then(|outcome| match outcome {
            CategoryDeletion::Deleted => Ok(JsonResponse::<models::Category>::build().no_content()),
            CategoryDeletion::NotFound => {
                Err(JsonResponse::<models::Category>::build().not_found("Category not found"))
            }
            CategoryDeletion::InUse(count) => {
                Err(JsonResponse::<models::Category>::build().bad_request(&format!(
                    "Cannot delete category \"{}\" because it is used by {} component(s)",
                    name, count
                )))
            }
        })
}
