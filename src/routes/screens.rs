use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use chrono::Utc;

use crate::backend::Backend;
use crate::domain::screen::Screen;
use crate::forms::list::ListQueryForm;
use crate::models::config::ServerConfig;
use crate::routes::{json_error, service_error_response};
use crate::services::ServiceError;
use crate::services::screens as screens_service;

fn parse_screen(slug: &str) -> Result<Screen, HttpResponse> {
    slug.parse::<Screen>()
        .map_err(|err| json_error(HttpResponse::NotFound(), &err.to_string()))
}

fn parse_form(req: &HttpRequest) -> Result<ListQueryForm, HttpResponse> {
    ListQueryForm::from_query_string(req.query_string()).map_err(|err| {
        log::warn!("Rejected list parameters {:?}: {err}", req.query_string());
        service_error_response(&ServiceError::from(err))
    })
}

#[get("/v1/{screen}")]
/// One page of a screen's table with its stats cards.
pub async fn show_screen(
    screen: web::Path<String>,
    req: HttpRequest,
    backend: web::Data<Backend>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let screen = match parse_screen(&screen) {
        Ok(screen) => screen,
        Err(response) => return response,
    };
    let form = match parse_form(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };

    match screens_service::load_screen_page(
        backend.get_ref(),
        screen,
        form,
        server_config.page_size,
    )
    .await
    {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => service_error_response(&err),
    }
}

#[get("/v1/{screen}/stats")]
/// Stats cards over the whole collection, ignoring search and filters.
pub async fn screen_stats(screen: web::Path<String>, backend: web::Data<Backend>) -> impl Responder {
    let screen = match parse_screen(&screen) {
        Ok(screen) => screen,
        Err(response) => return response,
    };

    match screens_service::load_screen_stats(backend.get_ref(), screen).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => service_error_response(&err),
    }
}

#[get("/v1/{screen}/export.csv")]
/// CSV download of every row matching the current search and filters.
pub async fn export_screen(
    screen: web::Path<String>,
    req: HttpRequest,
    backend: web::Data<Backend>,
) -> impl Responder {
    let screen = match parse_screen(&screen) {
        Ok(screen) => screen,
        Err(response) => return response,
    };
    let form = match parse_form(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };

    let today = Utc::now().date_naive();
    match screens_service::export_screen(backend.get_ref(), screen, form, today).await {
        Ok(export) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.filename),
            ))
            .body(export.body),
        Err(err) => service_error_response(&err),
    }
}
