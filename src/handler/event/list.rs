use serde_json::Value;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::mongo::{collect, expand_many};
use crate::utils::response::Response;
use actix_web::{Error, HttpResponse};
use crate::model::Event;

pub async fn task() -> Result<HttpResponse, Error> {
    let db = MongoDB.connect();

    let collection = db.collection::<Event::Event>("events");
    let result = collection.find(doc!{}).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let events = match collect(result.unwrap()).await {
        Ok(events) => events,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }
    };

    let mut body = Vec::new();

    for event in events {
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

        body.push(value);
    }

    Ok(Response::ok(&body))
}
