use actix_web::{web, HttpResponse};

/// The front page, compiled into the server binary so there is nothing to deploy alongside it
const INDEX_HTML: &str = include_str!("index.html");

///
/// Serves the front page
///
async fn handle_index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

///
/// Registers the static file endpoints
///
pub fn static_file_handler(config: &mut web::ServiceConfig) {
    config.service(web::resource("/").route(web::get().to(handle_index)));
}
