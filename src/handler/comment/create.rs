use uuid::Uuid;
use chrono::Utc;
use validator::Validate;
use serde::{ Serialize, Deserialize };
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::utils::validate::error_messages;
use actix_web::{web, Error, HttpResponse};
use crate::model::Comment;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    author: String,
    content: String,
}

pub async fn task(
    path: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let photo_id = path.into_inner();

    // The photo reference is not checked against the photos collection,
    // nor tied to any particular album.
    let comment = Comment::Comment {
        id: Uuid::new_v4().to_string(),
        photo: photo_id,
        author: form_data.author.clone(),
        content: form_data.content.clone(),
        created_at: Utc::now().timestamp_millis(),
    };

    if let Err(errors) = comment.validate() {
        return Ok(Response::validation_error(error_messages(&errors)));
    }

    let db = MongoDB.connect();

    let collection = db.collection::<Comment::Comment>("comments");
    let result = collection.insert_one(&comment).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::bad_request("Bad Request"));
    }

    Ok(Response::created(&comment))
}
