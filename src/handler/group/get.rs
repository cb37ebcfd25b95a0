use serde_json::Value;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::mongo::expand_many;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse};
use crate::model::Group;

pub async fn task(
    path: web::Path<String>
) -> Result<HttpResponse, Error> {
    let group_id = path.into_inner();
    let db = MongoDB.connect();

    let collection = db.collection::<Group::Group>("groups");
    let result = collection.find_one(doc!{ "_id": &group_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("Group Not Found"));
    }

    let group = option.unwrap();

    let admins = expand_many(
        &db,
        "users",
        &group.admins,
        &["firstname", "lastname", "email"],
    ).await;

    if let Err(error) = admins {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let members = expand_many(
        &db,
        "users",
        &group.members,
        &["firstname", "lastname", "email"],
    ).await;

    if let Err(error) = members {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let mut value = match serde_json::to_value(&group) {
        Ok(value) => value,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }
    };

    value["admins"] = Value::Array(admins.unwrap());
    value["members"] = Value::Array(members.unwrap());

    Ok(Response::ok(&value))
}
