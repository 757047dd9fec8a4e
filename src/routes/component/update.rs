use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::component::parse_id;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Update component.", skip(pg_pool))]
#[put("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    form: web::Json<forms::ComponentUpdateForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = match parse_id(&path.0) {
        Some(id) => id,
        None => {
            return Err(JsonResponse::<models::Component>::build().not_found("Component not found"))
        }
    };

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Component>::build().form_error(errors.to_string()));
    }

    let mut component = db::component::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Component>::build().internal_server_error(&err))?
        .ok_or_else(|| JsonResponse::<models::Component>::build().not_found("Component not found"))?;

    // Merge only the supplied fields; an empty update still refreshes
    // `updated_at` through the write below.
    form.into_inner().apply_to(&mut component);

    db::component::update(pg_pool.get_ref(), component)
        .await
        .map(|component| {
            JsonResponse::build()
                .set_id(component.id)
                .set_item(component)
                .ok("OK")
        })
        .map_err(|err| JsonResponse::<models::Component>::build().internal_server_error(&err))
}
