use uuid::Uuid;
use chrono::Utc;
use validator::Validate;
use serde::{ Serialize, Deserialize };
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::utils::validate::error_messages;
use actix_web::{web, Error, HttpResponse};
use crate::model::Album;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReqBody {
    event: String,
    title: String,
    description: Option<String>,
    created_by: String,
}

pub async fn task(
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let album = Album::Album {
        id: Uuid::new_v4().to_string(),
        event: form_data.event.clone(),
        title: form_data.title.clone(),
        description: form_data.description.clone(),
        created_by: form_data.created_by.clone(),
        created_at: Utc::now().timestamp_millis(),
    };

    if let Err(errors) = album.validate() {
        return Ok(Response::validation_error(error_messages(&errors)));
    }

    let db = MongoDB.connect();

    let collection = db.collection::<Album::Album>("albums");
    let result = collection.insert_one(&album).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::bad_request("Bad Request"));
    }

    Ok(Response::created(&album))
}
