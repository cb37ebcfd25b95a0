use uuid::Uuid;
use chrono::Utc;
use validator::Validate;
use serde::{ Serialize, Deserialize };
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::utils::validate::error_messages;
use actix_web::{web, Error, HttpResponse};
use crate::model::Poll;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReqBody {
    title: String,
    created_by: String,
}

pub async fn task(
    path: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let event_id = path.into_inner();

    // The event reference is only checked syntactically, never against
    // the events collection.
    let poll = Poll::Poll {
        id: Uuid::new_v4().to_string(),
        event: event_id,
        title: form_data.title.clone(),
        created_by: form_data.created_by.clone(),
        created_at: Utc::now().timestamp_millis(),
    };

    if let Err(errors) = poll.validate() {
        return Ok(Response::validation_error(error_messages(&errors)));
    }

    let db = MongoDB.connect();

    let collection = db.collection::<Poll::Poll>("polls");
    let result = collection.insert_one(&poll).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::bad_request("Bad Request"));
    }

    Ok(Response::created(&poll))
}
