use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::validate::object_ref_list;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    Public,
    Private,
    Secret,
}

impl Default for GroupType {
    fn default() -> Self {
        GroupType::Public
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(length(min = 3, message = "name must be at least 3 characters long"))]
    pub name: String,
    #[validate(length(max = 500, message = "description must be at most 500 characters long"))]
    pub description: Option<String>,
    pub icon: Option<String>,
    pub cover_photo: Option<String>,
    #[serde(rename = "type")]
    pub group_type: GroupType,
    pub allow_posts: bool,
    pub allow_event_creation: bool,
    #[validate(custom(function = object_ref_list, message = "admins must contain valid reference ids"))]
    pub admins: Vec<String>,
    #[validate(custom(function = object_ref_list, message = "members must contain valid reference ids"))]
    pub members: Vec<String>,
}
