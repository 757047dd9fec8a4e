use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::component::parse_id;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

// A component that has lost its last variant stays in place; removing it is
// always this explicit call, never a cascade.
#[tracing::instrument(name = "Delete component.", skip(pg_pool))]
#[delete("/{id}")]
pub async fn item(path: web::Path<(String,)>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let id = match parse_id(&path.0) {
        Some(id) => id,
        None => {
            return Err(JsonResponse::<models::Component>::build().not_found("Component not found"))
        }
    };

    db::component::delete(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Component>::build().internal_server_error(&err))
        .and_then(|deleted| match deleted {
            true => Ok(JsonResponse::<models::Component>::build().no_content()),
            false => Err(JsonResponse::<models::Component>::build().not_found("Component not found")),
        })
}
