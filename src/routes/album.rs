use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg
    //Create
    .route(
        "/album",
        web::post().to(Handler::Album::Create::task)
    )
    //Get all
    .route(
        "/album",
        web::get().to(Handler::Album::List::task)
    )
    //Photos of an album
    .route(
        "/album/{id}/photos",
        web::get().to(Handler::Album::Photos::task)
    );
}
