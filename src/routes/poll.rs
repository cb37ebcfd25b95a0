use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg
    //Create poll for an event
    .route(
        "/event/{id}/poll",
        web::post().to(Handler::Poll::Create::task)
    )
    //Add question
    .route(
        "/poll/{id}/question",
        web::post().to(Handler::Poll::AddQuestion::task)
    )
    //Add answer
    .route(
        "/question/{id}/answer",
        web::post().to(Handler::Poll::AddAnswer::task)
    )
    //Vote
    .route(
        "/question/{id}/vote",
        web::post().to(Handler::Poll::AddVote::task)
    )
    //Results
    .route(
        "/poll/{id}/results",
        web::get().to(Handler::Poll::Results::task)
    );
}
