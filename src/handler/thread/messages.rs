use serde_json::Value;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::mongo::{collect, expand_one};
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse};
use crate::model::Thread;

pub async fn task(
    path: web::Path<String>
) -> Result<HttpResponse, Error> {
    let thread_id = path.into_inner();
    let db = MongoDB.connect();

    let collection = db.collection::<Thread::Message>("messages");
    let result = collection.find(doc!{ "thread": &thread_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let messages = match collect(result.unwrap()).await {
        Ok(messages) => messages,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }
    };

    let mut body = Vec::new();

    for message in messages {
        let author = expand_one(
            &db,
            "users",
            &message.author,
            &["firstname", "lastname"],
        ).await;

        if let Err(error) = author {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }

        let reply_to = match &message.reply_to {
            Some(message_id) => {
                match expand_one(&db, "messages", message_id, &["content"]).await {
                    Ok(reply_to) => reply_to,
                    Err(error) => {
                        log::error!("{:?}", error);
                        return Ok(Response::internal_server_error());
                    }
                }
            }
            None => Value::Null,
        };

        let mut value = match serde_json::to_value(&message) {
            Ok(value) => value,
            Err(error) => {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error());
            }
        };

        value["author"] = author.unwrap();
        value["replyTo"] = reply_to;

        body.push(value);
    }

    Ok(Response::ok(&body))
}
