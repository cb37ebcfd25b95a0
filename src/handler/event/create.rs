use uuid::Uuid;
use chrono::{DateTime, Utc};
use validator::Validate;
use serde::{ Serialize, Deserialize };
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::utils::validate::error_messages;
use actix_web::{web, Error, HttpResponse};
use crate::model::Event;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReqBody {
    name: String,
    description: Option<String>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    location: String,
    cover_photo: Option<String>,
    #[serde(default)]
    is_private: bool,
    #[serde(default)]
    organizers: Vec<String>,
    #[serde(default)]
    participants: Vec<String>,
}

pub async fn task(
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let event = Event::Event {
        id: Uuid::new_v4().to_string(),
        name: form_data.name.clone(),
        description: form_data.description.clone(),
        start_date: form_data.start_date,
        end_date: form_data.end_date,
        location: form_data.location.clone(),
        cover_photo: form_data.cover_photo.clone(),
        is_private: form_data.is_private,
        organizers: form_data.organizers.clone(),
        participants: form_data.participants.clone(),
    };

    if let Err(errors) = event.validate() {
        return Ok(Response::validation_error(error_messages(&errors)));
    }

    let db = MongoDB.connect();

    let collection = db.collection::<Event::Event>("events");
    let result = collection.insert_one(&event).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::bad_request("Bad Request"));
    }

    Ok(Response::created(&event))
}
