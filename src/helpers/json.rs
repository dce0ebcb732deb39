use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;
use uuid::Uuid;

// Uniform response envelope. Success goes out as an HttpResponse, failures
// are converted into actix errors carrying the same JSON body.
#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub status: String,
    pub message: String,
    pub code: u32,
    pub id: Option<Uuid>,
    pub item: Option<T>,
    pub list: Option<Vec<T>>,
}

#[derive(Default)]
pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize + Default,
{
    id: Option<Uuid>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize + Default,
{
    pub fn set_id(mut self, id: Uuid) -> Self {
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

    fn to_json_response(self, code: StatusCode, message: String) -> JsonResponse<T> {
        let status = if code.is_success() { "OK" } else { "Error" };

        JsonResponse {
            status: status.to_string(),
            message,
            code: code.as_u16() as u32,
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    fn to_error(self, code: StatusCode, message: String) -> Error {
        let body = self.to_json_response(code, message.clone());
        InternalError::from_response(message, HttpResponse::build(code).json(body)).into()
    }

    pub fn ok(self, message: impl ToString) -> HttpResponse {
        HttpResponse::Ok().json(self.to_json_response(StatusCode::OK, message.to_string()))
    }

    pub fn created(self, message: impl ToString) -> HttpResponse {
        HttpResponse::Created().json(self.to_json_response(StatusCode::CREATED, message.to_string()))
    }

    pub fn bad_request(self, message: impl ToString) -> Error {
        self.to_error(StatusCode::BAD_REQUEST, message.to_string())
    }

    // Payload failed form validation.
    pub fn form_error(self, message: impl ToString) -> Error {
        self.to_error(StatusCode::BAD_REQUEST, message.to_string())
    }

    pub fn not_found(self, message: impl ToString) -> Error {
        self.to_error(StatusCode::NOT_FOUND, message.to_string())
    }

    pub fn conflict(self, message: impl ToString) -> Error {
        self.to_error(StatusCode::CONFLICT, message.to_string())
    }

    pub fn internal_server_error(self, message: impl ToString) -> Error {
        let message = message.to_string();
        let message = if message.trim().is_empty() {
            "Internal Server Error".to_string()
        } else {
            message
        };
        self.to_error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize + Default,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}
