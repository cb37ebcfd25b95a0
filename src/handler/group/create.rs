use uuid::Uuid;
use validator::Validate;
use serde::{ Serialize, Deserialize };
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::utils::validate::error_messages;
use actix_web::{web, Error, HttpResponse};
use crate::model::Group;

fn default_allow_posts() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReqBody {
    name: String,
    description: Option<String>,
    icon: Option<String>,
    cover_photo: Option<String>,
    #[serde(rename = "type", default)]
    group_type: Group::GroupType,
    #[serde(default = "default_allow_posts")]
    allow_posts: bool,
    #[serde(default)]
    allow_event_creation: bool,
    #[serde(default)]
    admins: Vec<String>,
    #[serde(default)]
    members: Vec<String>,
}

pub async fn task(
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let group = Group::Group {
        id: Uuid::new_v4().to_string(),
        name: form_data.name.clone(),
        description: form_data.description.clone(),
        icon: form_data.icon.clone(),
        cover_photo: form_data.cover_photo.clone(),
        group_type: form_data.group_type.clone(),
        allow_posts: form_data.allow_posts,
        allow_event_creation: form_data.allow_event_creation,
        admins: form_data.admins.clone(),
        members: form_data.members.clone(),
    };

    if let Err(errors) = group.validate() {
        return Ok(Response::validation_error(error_messages(&errors)));
    }

    let db = MongoDB.connect();

    let collection = db.collection::<Group::Group>("groups");
    let result = collection.insert_one(&group).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::bad_request("Bad Request"));
    }

    Ok(Response::created(&group))
}
