use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::component::parse_id;
use crate::routes::component::variant::parse_variant_id;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Update variant.", skip(pg_pool))]
#[put("/{id}/variants/{variant_id}")]
pub async fn item(
    path: web::Path<(String, String)>,
    form: web::Json<forms::VariantUpdateForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (raw_id, raw_variant_id) = path.into_inner();
    let (id, variant_id) = match (parse_id(&raw_id), parse_variant_id(&raw_variant_id)) {
        (Some(id), Some(variant_id)) => (id, variant_id),
        _ => {
            return Err(JsonResponse::<models::Variant>::build()
                .not_found("Component or variant not found"))
        }
    };

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Variant>::build().form_error(errors.to_string()));
    }

    let component = db::component::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Variant>::build().internal_server_error(&err))?
        .ok_or_else(|| {
            JsonResponse::<models::Variant>::build().not_found("Component or variant not found")
        })?;

    // The target is addressed by the (component id, variant id) pair; only
    // the matching element of the array is touched.
    let mut variants = component.variants.0;
    let position = variants.iter().position(|variant| variant.id == variant_id);
    let position = match position {
        Some(position) => position,
        None => {
            return Err(JsonResponse::<models::Variant>::build()
                .not_found("Component or variant not found"))
        }
    };

    form.into_inner().apply_to(&mut variants[position]);
    let updated = variants[position].clone();

    db::component::update_variants(pg_pool.get_ref(), id, &variants)
        .await
        .map_err(|err| JsonResponse::<models::Variant>::build().internal_server_error(&err))?
        .ok_or_else(|| {
            JsonResponse::<models::Variant>::build().not_found("Component or variant not found")
        })?;

    Ok(JsonResponse::build().set_item(updated).ok("OK"))
}
