//!
//! # Hex Affine HTTP server
//!

use hex_http::*;

use actix_web::{middleware, App, HttpServer};

const PACKAGE_NAME: &str    = env!("CARGO_PKG_NAME");
const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
const SERVER_ADDR: &str     = "127.0.0.1:3000";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init();

    println!("{} v{} listening at http://{}/", PACKAGE_NAME, PACKAGE_VERSION, SERVER_ADDR);

    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(transform_handler)
            .configure(static_file_handler)
    })
    .bind(SERVER_ADDR)?
    .run()
    .await
}
