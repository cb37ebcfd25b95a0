use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg
    //Create
    .route(
        "/group",
        web::post().to(Handler::Group::Create::task)
    )
    //Get all
    .route(
        "/groups",
        web::get().to(Handler::Group::List::task)
    )
    //Get by id
    .route(
        "/group/{id}",
        web::get().to(Handler::Group::Get::task)
    )
    //Add member
    .route(
        "/group/{id}/addMember",
        web::patch().to(Handler::Group::AddMember::task)
    )
    //Remove member
    .route(
        "/group/{id}/removeMember",
        web::patch().to(Handler::Group::RemoveMember::task)
    )
    //Delete
    .route(
        "/group/{id}",
        web::delete().to(Handler::Group::Delete::task)
    );
}
