use serde_json::Value;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::mongo::{collect, expand_many};
use crate::utils::response::Response;
use actix_web::{Error, HttpResponse};
use crate::model::Group;

pub async fn task() -> Result<HttpResponse, Error> {
    let db = MongoDB.connect();

    let collection = db.collection::<Group::Group>("groups");
    let result = collection.find(doc!{}).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let groups = match collect(result.unwrap()).await {
        Ok(groups) => groups,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }
    };

    let mut body = Vec::new();

    for group in groups {
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

        body.push(value);
    }

    Ok(Response::ok(&body))
}
