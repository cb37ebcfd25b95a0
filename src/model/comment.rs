use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::validate::object_ref;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(custom(function = object_ref, message = "photo must be a valid reference id"))]
    pub photo: String,
    #[validate(custom(function = object_ref, message = "author must be a valid reference id"))]
    pub author: String,
    #[validate(length(min = 1, max = 500, message = "content must be between 1 and 500 characters"))]
    pub content: String,
    pub created_at: i64,
}
