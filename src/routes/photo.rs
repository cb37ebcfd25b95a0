use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg
    //Add photo to an album
    .route(
        "/album/{id}/photo",
        web::post().to(Handler::Photo::Create::task)
    )
    //Comments on a photo
    .route(
        "/photo/{id}/comments",
        web::get().to(Handler::Photo::Comments::task)
    );
}
