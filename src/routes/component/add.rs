use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add component.", skip(pg_pool))]
#[post("")]
pub async fn item(
    form: web::Json<forms::ComponentForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Component>::build().form_error(errors.to_string()));
    }

    let component: models::Component = form.into_inner().into();

    let component = db::component::insert(pg_pool.get_ref(), component)
        .await
        .map_err(|err| JsonResponse::<models::Component>::build().internal_server_error(&err))?;

    // Side effect of component creation: the category record comes into
    // existence with the first component naming it.
    db::category::ensure(pg_pool.get_ref(), &component.category)
        .await
        .map_err(|err| JsonResponse::<models::Component>::build().internal_server_error(&err))?;

    Ok(JsonResponse::build()
        .set_id(component.id)
        .set_item(component)
        .created("Created"))
}
