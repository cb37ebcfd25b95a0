use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg
    //Create
    .route(
        "/event",
        web::post().to(Handler::Event::Create::task)
    )
    //Get all
    .route(
        "/events",
        web::get().to(Handler::Event::List::task)
    )
    //Get by id
    .route(
        "/event/{id}",
        web::get().to(Handler::Event::Get::task)
    )
    //Delete
    .route(
        "/event/{id}",
        web::delete().to(Handler::Event::Delete::task)
    )
    //Add participant
    .route(
        "/event/{id}/addParticipant",
        web::patch().to(Handler::Event::AddParticipant::task)
    )
    //Remove participant
    .route(
        "/event/{id}/removeParticipant",
        web::patch().to(Handler::Event::RemoveParticipant::task)
    );
}
