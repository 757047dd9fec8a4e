use actix_web::error::InternalError;
use actix_web::HttpResponse;
use serde_derive::Serialize;

/// Uniform response envelope. Success payloads ride in `item` or `list`;
/// error responses carry only the message and code.
#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) id: Option<i32>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            list: None,
        }
    }
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn envelope(self, status: &str, code: u32, message: String) -> JsonResponse<T> {
        JsonResponse {
            status: status.to_string(),
            message,
            code,
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    fn message_or(message: &str, default: &str) -> String {
        if message.trim().is_empty() {
            default.to_string()
        } else {
            message.to_string()
        }
    }

    pub fn ok(self, message: &str) -> HttpResponse {
        let message = Self::message_or(message, "OK");
        HttpResponse::Ok().json(self.envelope("OK", 200, message))
    }

    pub fn created(self, message: &str) -> HttpResponse {
        let message = Self::message_or(message, "Created");
        HttpResponse::Created().json(self.envelope("OK", 201, message))
    }

    pub fn no_content(self) -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn bad_request(self, message: &str) -> actix_web::Error {
        let message = Self::message_or(message, "Validation error");
        let response = HttpResponse::BadRequest().json(self.envelope("Error", 400, message.clone()));
        InternalError::from_response(message, response).into()
    }

    pub fn form_error(self, message: String) -> actix_web::Error {
        self.bad_request(&message)
    }

    pub fn not_found(self, message: &str) -> actix_web::Error {
        let message = Self::message_or(message, "Object not found");
        let response = HttpResponse::NotFound().json(self.envelope("Error", 404, message.clone()));
        InternalError::from_response(message, response).into()
    }

    pub fn internal_server_error(self, message: &str) -> actix_web::Error {
        let message = Self::message_or(message, "Internal Server Error");
        let response =
            HttpResponse::InternalServerError().json(self.envelope("Error", 500, message.clone()));
        InternalError::from_response(message, response).into()
    }
}
