use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg
    //Comment on a photo
    .route(
        "/photo/{id}/comment",
        web::post().to(Handler::Comment::Create::task)
    );
}
