use uuid::Uuid;
use chrono::Utc;
use validator::Validate;
use serde::{ Serialize, Deserialize };
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::utils::validate::error_messages;
use actix_web::{web, Error, HttpResponse};
use crate::model::Thread;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReqBody {
    author: String,
    content: String,
    reply_to: Option<String>,
}

pub async fn task(
    path: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let thread_id = path.into_inner();

    let message = Thread::Message {
        id: Uuid::new_v4().to_string(),
        thread: thread_id,
        author: form_data.author.clone(),
        content: form_data.content.clone(),
        reply_to: form_data.reply_to.clone(),
        created_at: Utc::now().timestamp_millis(),
    };

    if let Err(errors) = message.validate() {
        return Ok(Response::validation_error(error_messages(&errors)));
    }

    let db = MongoDB.connect();

    let collection = db.collection::<Thread::Message>("messages");
    let result = collection.insert_one(&message).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::bad_request("Bad Request"));
    }

    Ok(Response::created(&message))
}
