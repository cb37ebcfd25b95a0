use serde::{Deserialize, Serialize};
use validator::Validate;

// Users are seeded by the account service; this backend only reads them
// for existence checks and reference expansion.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(length(min = 2, message = "firstname must be at least 2 characters long"))]
    pub firstname: String,
    #[validate(length(min = 2, message = "lastname must be at least 2 characters long"))]
    pub lastname: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(range(min = 13, max = 120, message = "age must be between 13 and 120"))]
    pub age: Option<u32>,
    #[validate(length(max = 100, message = "city must be at most 100 characters long"))]
    pub city: Option<String>,
}
