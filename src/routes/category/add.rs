use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add category.", skip(pg_pool))]
#[post("")]
pub async fn item(
    form: web::Json<forms::CategoryForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Category>::build().form_error(errors.to_string()));
    }

    db::category::insert(pg_pool.get_ref(), &form.name)
        .await
        .map_err(|err| JsonResponse::<models::Category>::build().internal_server_error(&err))
        .and_then(|category| match category {
            Some(category) => Ok(JsonResponse::build()
                .set_id(category.id)
                .set_item(category)
                .created("Created")),
            // Name uniqueness is store-enforced.
            None => Err(JsonResponse::<models::Category>::build()
                .bad_request("Category already exists")),
        })
}
