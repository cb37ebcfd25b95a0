use serde_json::Value;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::mongo::{collect, expand_one};
use crate::utils::response::Response;
use actix_web::{Error, HttpResponse};
use crate::model::Thread;

pub async fn task() -> Result<HttpResponse, Error> {
    let db = MongoDB.connect();

    let collection = db.collection::<Thread::Thread>("threads");
    let result = collection.find(doc!{}).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let threads = match collect(result.unwrap()).await {
        Ok(threads) => threads,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }
    };

    let mut body = Vec::new();

    for thread in threads {
        let group = match &thread.group {
            Some(group_id) => {
                match expand_one(&db, "groups", group_id, &["name"]).await {
                    Ok(group) => group,
                    Err(error) => {
                        log::error!("{:?}", error);
                        return Ok(Response::internal_server_error());
                    }
                }
            }
            None => Value::Null,
        };

        let event = match &thread.event {
            Some(event_id) => {
                match expand_one(&db, "events", event_id, &["name"]).await {
                    Ok(event) => event,
                    Err(error) => {
                        log::error!("{:?}", error);
                        return Ok(Response::internal_server_error());
                    }
                }
            }
            None => Value::Null,
        };

        let created_by = expand_one(
            &db,
            "users",
            &thread.created_by,
            &["firstname", "lastname"],
        ).await;

        if let Err(error) = created_by {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }

        let mut value = match serde_json::to_value(&thread) {
            Ok(value) => value,
            Err(error) => {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error());
            }
        };

        value["group"] = group;
        value["event"] = event;
        value["createdBy"] = created_by.unwrap();

        body.push(value);
    }

    Ok(Response::ok(&body))
}
