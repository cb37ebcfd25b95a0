use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::validate::object_ref;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(custom(function = object_ref, message = "event must be a valid reference id"))]
    pub event: String,
    #[validate(length(min = 3, message = "title must be at least 3 characters long"))]
    pub title: String,
    #[validate(length(max = 800, message = "description must be at most 800 characters long"))]
    pub description: Option<String>,
    #[validate(custom(function = object_ref, message = "createdBy must be a valid reference id"))]
    pub created_by: String,
    pub created_at: i64,
}
