use serde::Serialize;
use serde_json::json;
use actix_web::HttpResponse;
use crate::utils::json::expose_id;

pub struct Response;

impl Response {
    pub fn ok<T: Serialize>(body: &T) -> HttpResponse {
        match serde_json::to_value(body) {
            Ok(value) => {
                HttpResponse::Ok()
                    .content_type("application/json")
                    .json(expose_id(value))
            }
            Err(error) => {
                log::error!("{:?}", error);
                Self::internal_server_error()
            }
        }
    }

    pub fn created<T: Serialize>(body: &T) -> HttpResponse {
        match serde_json::to_value(body) {
            Ok(value) => {
                HttpResponse::Created()
                    .content_type("application/json")
                    .json(expose_id(value))
            }
            Err(error) => {
                log::error!("{:?}", error);
                Self::internal_server_error()
            }
        }
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({ "code": 400, "message": message }))
    }

    pub fn validation_error(errors: Vec<String>) -> HttpResponse {
        HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "code": 400,
                "message": "Validation Error",
                "errors": errors,
            }))
    }

    pub fn not_found(message: &str) -> HttpResponse {
        HttpResponse::NotFound()
            .content_type("application/json")
            .json(json!({ "code": 404, "message": message }))
    }

    // Read-path store failures. The cause goes to the log at the call
    // site, never to the caller.
    pub fn internal_server_error() -> HttpResponse {
        HttpResponse::InternalServerError()
            .content_type("application/json")
            .json(json!({ "code": 500, "message": "Internal Server Error" }))
    }
}
