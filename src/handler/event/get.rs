use serde_json::Value;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::mongo::expand_many;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse};
use crate::model::Event;

pub async fn task(
    path: web::Path<String>
) -> Result<HttpResponse, Error> {
    let event_id = path.into_inner();
    let db = MongoDB.connect();

    let collection = db.collection::<Event::Event>("events");
    let result = collection.find_one(doc!{ "_id": &event_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("Event Not Found"));
    }

    let event = option.unwrap();

    let organizers = expand_many(
        &db,
        "users",
        &event.organizers,
        &["firstname", "lastname", "email"],
    ).await;

    if let Err(error) = organizers {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let participants = expand_many(
        &db,
        "users",
        &event.participants,
        &["firstname", "lastname", "email"],
    ).await;

    if let Err(error) = participants {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let mut value = match serde_json::to_value(&event) {
        Ok(value) => value,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }
    };

    value["organizers"] = Value::Array(organizers.unwrap());
    value["participants"] = Value::Array(participants.unwrap());

    Ok(Response::ok(&value))
}
