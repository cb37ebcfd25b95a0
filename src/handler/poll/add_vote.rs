use uuid::Uuid;
use chrono::Utc;
use validator::Validate;
use mongodb::bson::doc;
use serde::{ Serialize, Deserialize };
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::utils::mongo::is_duplicate_key;
use crate::utils::validate::error_messages;
use actix_web::{web, Error, HttpResponse};
use crate::model::Poll;

const ALREADY_VOTED: &str = "User has already voted on this question";

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReqBody {
    user: String,
    selected_answer: String,
}

pub async fn task(
    path: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let question_id = path.into_inner();

    // No check that the selected answer belongs to this question.
    let vote = Poll::Vote {
        id: Uuid::new_v4().to_string(),
        question: question_id.clone(),
        selected_answer: form_data.selected_answer.clone(),
        user: form_data.user.clone(),
        created_at: Utc::now().timestamp_millis(),
    };

    if let Err(errors) = vote.validate() {
        return Ok(Response::validation_error(error_messages(&errors)));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Poll::Vote>("votes");

    let result = collection.find_one(
        doc!{ "question": &question_id, "user": &form_data.user }
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::bad_request("Bad Request"));
    }

    if result.unwrap().is_some() {
        return Ok(Response::bad_request(ALREADY_VOTED));
    }

    // The unique (question, user) index makes the insert the real
    // enforcement point; two racing requests cannot both land.
    let result = collection.insert_one(&vote).await;

    if let Err(error) = result {
        if is_duplicate_key(&error) {
            return Ok(Response::bad_request(ALREADY_VOTED));
        }

        log::error!("{:?}", error);
        return Ok(Response::bad_request("Bad Request"));
    }

    Ok(Response::created(&vote))
}
