use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::mongo::{collect, expand_one};
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse};
use crate::model::Photo;

pub async fn task(
    path: web::Path<String>
) -> Result<HttpResponse, Error> {
    let album_id = path.into_inner();
    let db = MongoDB.connect();

    let collection = db.collection::<Photo::Photo>("photos");
    let result = collection.find(doc!{ "album": &album_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let photos = match collect(result.unwrap()).await {
        Ok(photos) => photos,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }
    };

    let mut body = Vec::new();

    for photo in photos {
        let uploaded_by = expand_one(
            &db,
            "users",
            &photo.uploaded_by,
            &["firstname", "lastname"],
        ).await;

        if let Err(error) = uploaded_by {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }

        let mut value = match serde_json::to_value(&photo) {
            Ok(value) => value,
            Err(error) => {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error());
            }
        };

        value["uploadedBy"] = uploaded_by.unwrap();

        body.push(value);
    }

    Ok(Response::ok(&body))
}
