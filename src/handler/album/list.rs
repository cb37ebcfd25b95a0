use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::mongo::{collect, expand_one};
use crate::utils::response::Response;
use actix_web::{Error, HttpResponse};
use crate::model::Album;

pub async fn task() -> Result<HttpResponse, Error> {
    let db = MongoDB.connect();

    let collection = db.collection::<Album::Album>("albums");
    let result = collection.find(doc!{}).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let albums = match collect(result.unwrap()).await {
        Ok(albums) => albums,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }
    };

    let mut body = Vec::new();

    for album in albums {
        let event = expand_one(&db, "events", &album.event, &["name"]).await;

        if let Err(error) = event {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }

        let created_by = expand_one(
            &db,
            "users",
            &album.created_by,
            &["firstname", "lastname"],
        ).await;

        if let Err(error) = created_by {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }

        let mut value = match serde_json::to_value(&album) {
            Ok(value) => value,
            Err(error) => {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error());
            }
        };

        value["event"] = event.unwrap();
        value["createdBy"] = created_by.unwrap();

        body.push(value);
    }

    Ok(Response::ok(&body))
}
