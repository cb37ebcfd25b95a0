use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse};
use crate::model::Thread;

pub async fn task(
    path: web::Path<String>
) -> Result<HttpResponse, Error> {
    let message_id = path.into_inner();
    let db = MongoDB.connect();

    let collection = db.collection::<Thread::Message>("messages");
    let result = collection.find_one_and_delete(doc!{ "_id": &message_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    match result.unwrap() {
        Some(message) => Ok(Response::ok(&message)),
        None => Ok(Response::ok(&json!({}))),
    }
}
