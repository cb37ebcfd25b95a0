use uuid::Uuid;
use validator::Validate;
use serde::{ Serialize, Deserialize };
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::utils::validate::error_messages;
use actix_web::{web, Error, HttpResponse};
use crate::model::Poll;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    text: String,
}

pub async fn task(
    path: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let question_id = path.into_inner();

    let answer = Poll::Answer {
        id: Uuid::new_v4().to_string(),
        question: question_id,
        text: form_data.text.clone(),
    };

    if let Err(errors) = answer.validate() {
        return Ok(Response::validation_error(error_messages(&errors)));
    }

    let db = MongoDB.connect();

    let collection = db.collection::<Poll::Answer>("answers");
    let result = collection.insert_one(&answer).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::bad_request("Bad Request"));
    }

    Ok(Response::created(&answer))
}
