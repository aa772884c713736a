//! HTTP handlers for the console API.

use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ServiceError;

pub mod main;
pub mod screens;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// JSON error body with the given status.
pub fn json_error(mut response: actix_web::HttpResponseBuilder, message: &str) -> HttpResponse {
    response.json(ErrorBody { error: message })
}

/// Maps a service failure onto an HTTP response.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(message) => json_error(HttpResponse::BadRequest(), message),
        ServiceError::Backend(_) => {
            json_error(HttpResponse::BadGateway(), "Staff API is unavailable")
        }
        ServiceError::Export(_) => {
            json_error(HttpResponse::InternalServerError(), "Export failed")
        }
    }
}
