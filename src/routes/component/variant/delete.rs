use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::component::parse_id;
use crate::routes::component::variant::parse_variant_id;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Delete variant.", skip(pg_pool))]
#[delete("/{id}/variants/{variant_id}")]
pub async fn item(
    path: web::Path<(String, String)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (raw_id, raw_variant_id) = path.into_inner();
    let id = match parse_id(&raw_id) {
        Some(id) => id,
        None => {
            return Err(JsonResponse::<models::Variant>::build().not_found("Component not found"))
        }
    };

    let component = db::component::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Variant>::build().internal_server_error(&err))?
        .ok_or_else(|| JsonResponse::<models::Variant>::build().not_found("Component not found"))?;

    // Removing an id that is not in the array is a no-op success; siblings
    // keep their identity and order either way.
    let mut variants = component.variants.0;
    if let Some(variant_id) = parse_variant_id(&raw_variant_id) {
        variants.retain(|variant| variant.id != variant_id);
    }

    db::component::update_variants(pg_pool.get_ref(), id, &variants)
        .await
        .map_err(|err| JsonResponse::<models::Variant>::build().internal_server_error(&err))?
        .ok_or_else(|| JsonResponse::<models::Variant>::build().not_found("Component not found"))?;

    Ok(JsonResponse::<models::Variant>::build().no_content())
}
