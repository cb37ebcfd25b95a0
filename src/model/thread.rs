use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::validate::object_ref;

// A thread hangs off a group, an event, or neither; both refs stay null
// when absent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(length(min = 3, message = "title must be at least 3 characters long"))]
    pub title: String,
    #[validate(custom(function = object_ref, message = "group must be a valid reference id"))]
    pub group: Option<String>,
    #[validate(custom(function = object_ref, message = "event must be a valid reference id"))]
    pub event: Option<String>,
    #[validate(custom(function = object_ref, message = "createdBy must be a valid reference id"))]
    pub created_by: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(custom(function = object_ref, message = "thread must be a valid reference id"))]
    pub thread: String,
    #[validate(custom(function = object_ref, message = "author must be a valid reference id"))]
    pub author: String,
    #[validate(length(min = 1, max = 2000, message = "content must be between 1 and 2000 characters"))]
    pub content: String,
    #[validate(custom(function = object_ref, message = "replyTo must be a valid reference id"))]
    pub reply_to: Option<String>,
    pub created_at: i64,
}
