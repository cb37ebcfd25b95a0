use mongodb::bson::doc;
use serde::{ Serialize, Deserialize };
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse};
use crate::model::{Group, User};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReqBody {
    user_id: String,
}

pub async fn task(
    path: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let group_id = path.into_inner();
    let db = MongoDB.connect();

    let collection = db.collection::<Group::Group>("groups");
    let result = collection.find_one(doc!{ "_id": &group_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::bad_request("Bad Request"));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("Group not found"));
    }

    let mut group = option.unwrap();

    let users = db.collection::<User::User>("users");
    let result = users.find_one(doc!{ "_id": &form_data.user_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::bad_request("Bad Request"));
    }

    if result.unwrap().is_none() {
        return Ok(Response::not_found("User not found"));
    }

    let result = collection.update_one(
        doc!{ "_id": &group_id },
        doc!{ "$pull": { "members": &form_data.user_id } },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::bad_request("Bad Request"));
    }

    group.members.retain(|id| id != &form_data.user_id);

    Ok(Response::ok(&group))
}
