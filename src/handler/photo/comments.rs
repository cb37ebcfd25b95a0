use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::mongo::{collect, expand_one};
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse};
use crate::model::Comment;

pub async fn task(
    path: web::Path<String>
) -> Result<HttpResponse, Error> {
    let photo_id = path.into_inner();
    let db = MongoDB.connect();

    let collection = db.collection::<Comment::Comment>("comments");
    let result = collection.find(doc!{ "photo": &photo_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let comments = match collect(result.unwrap()).await {
        Ok(comments) => comments,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }
    };

    let mut body = Vec::new();

    for comment in comments {
        let author = expand_one(
            &db,
            "users",
            &comment.author,
            &["firstname", "lastname"],
        ).await;

        if let Err(error) = author {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }

        let mut value = match serde_json::to_value(&comment) {
            Ok(value) => value,
            Err(error) => {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error());
            }
        };

        value["author"] = author.unwrap();

        body.push(value);
    }

    Ok(Response::ok(&body))
}
