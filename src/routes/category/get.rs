use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "List categories.", skip(pg_pool))]
#[get("")]
pub async fn list(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::category::fetch_all(pg_pool.get_ref())
        .await
        .map(|categories| JsonResponse::build().set_list(categories).ok("OK"))
        .map_err(|err| JsonResponse::<models::Category>::build().internal_server_error(&err))
}
