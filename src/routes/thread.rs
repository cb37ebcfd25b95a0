use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg
    //Create
    .route(
        "/thread",
        web::post().to(Handler::Thread::Create::task)
    )
    //Get all
    .route(
        "/thread",
        web::get().to(Handler::Thread::List::task)
    )
    //Messages of a thread
    .route(
        "/thread/{id}/messages",
        web::get().to(Handler::Thread::Messages::task)
    )
    //Post message
    .route(
        "/thread/{id}/message",
        web::post().to(Handler::Thread::AddMessage::task)
    )
    //Delete message
    .route(
        "/message/{id}",
        web::delete().to(Handler::Thread::DeleteMessage::task)
    );
}
