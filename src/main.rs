#![allow(non_snake_case)]

mod model;
pub use model as Model;

mod handler;
pub use handler as Handler;

mod routes;
pub use routes as Routes;

mod builtins;
pub use builtins as BuiltIns;

mod utils;

use std::env;
use actix_web::{web, App, HttpServer};
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if let Err(error) = MongoDB.init().await {
        log::error!("{:?}", error);
        std::process::exit(1);
    }

    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let port = port.parse::<u16>().unwrap_or(3000);

    log::info!("listening on port {}", port);

    HttpServer::new(|| {
        App::new()
            .app_data(web::JsonConfig::default().error_handler(|error, _req| {
                actix_web::error::InternalError::from_response(
                    error,
                    Response::bad_request("Bad Request"),
                ).into()
            }))
            .configure(Routes::Event::router)
            .configure(Routes::Group::router)
            .configure(Routes::Album::router)
            .configure(Routes::Photo::router)
            .configure(Routes::Comment::router)
            .configure(Routes::Thread::router)
            .configure(Routes::Poll::router)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
