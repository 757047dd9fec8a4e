use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::component::parse_id;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "List components.", skip(pg_pool))]
#[get("")]
pub async fn list(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::component::fetch_all(pg_pool.get_ref())
        .await
        .map(|components| JsonResponse::build().set_list(components).ok("OK"))
        .map_err(|err| JsonResponse::<models::Component>::build().internal_server_error(&err))
}

#[tracing::instrument(name = "List components by category.", skip(pg_pool))]
#[get("/category/{category}")]
pub async fn list_by_category(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (category,) = path.into_inner();
    db::component::fetch_by_category(pg_pool.get_ref(), &category)
        .await
        .map(|components| JsonResponse::build().set_list(components).ok("OK"))
        .map_err(|err| JsonResponse::<models::Component>::build().internal_server_error(&err))
}

#[tracing::instrument(name = "Get component.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item(path: web::Path<(String,)>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let id = match parse_id(&path.0) {
        Some(id) => id,
        None => {
            return Err(JsonResponse::<models::Component>::build().not_found("Component not found"))
        }
    };

    db::component::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Component>::build().internal_server_error(&err))
        .and_then(|component| match component {
            Some(component) => Ok(JsonResponse::build()
                .set_id(component.id)
                .set_item(component)
                .ok("OK")),
            None => Err(JsonResponse::<models::Component>::build().not_found("Component not found")),
        })
}
