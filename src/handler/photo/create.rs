use uuid::Uuid;
use chrono::Utc;
use validator::Validate;
use serde::{ Serialize, Deserialize };
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::utils::validate::error_messages;
use actix_web::{web, Error, HttpResponse};
use crate::model::Photo;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReqBody {
    uploaded_by: String,
    url: String,
    caption: Option<String>,
}

pub async fn task(
    path: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let album_id = path.into_inner();

    // The album reference is not checked against the albums collection.
    let photo = Photo::Photo {
        id: Uuid::new_v4().to_string(),
        album: album_id,
        uploaded_by: form_data.uploaded_by.clone(),
        url: form_data.url.clone(),
        caption: form_data.caption.clone(),
        created_at: Utc::now().timestamp_millis(),
    };

    if let Err(errors) = photo.validate() {
        return Ok(Response::validation_error(error_messages(&errors)));
    }

    let db = MongoDB.connect();

    let collection = db.collection::<Photo::Photo>("photos");
    let result = collection.insert_one(&photo).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::bad_request("Bad Request"));
    }

    Ok(Response::created(&photo))
}
