use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::component::parse_id;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add variant.", skip(pg_pool))]
#[post("/{id}/variants")]
pub async fn item(
    path: web::Path<(String,)>,
    form: web::Json<forms::VariantForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = match parse_id(&path.0) {
        Some(id) => id,
        None => {
            return Err(JsonResponse::<models::Variant>::build().not_found("Component not found"))
        }
    };

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Variant>::build().form_error(errors.to_string()));
    }

    let component = db::component::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Variant>::build().internal_server_error(&err))?
        .ok_or_else(|| JsonResponse::<models::Variant>::build().not_found("Component not found"))?;

    let variant: models::Variant = form.into_inner().into();

    let mut variants = component.variants.0;
    variants.push(variant.clone());

    db::component::update_variants(pg_pool.get_ref(), id, &variants)
        .await
        .map_err(|err| JsonResponse::<models::Variant>::build().internal_server_error(&err))?
        .ok_or_else(|| JsonResponse::<models::Variant>::build().not_found("Component not found"))?;

    Ok(JsonResponse::build().set_item(variant).created("Created"))
}
