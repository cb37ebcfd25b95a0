use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::utils::validate::object_ref_list;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = chronological_dates, skip_on_field_errors = false))]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(length(min = 3, message = "name must be at least 3 characters long"))]
    pub name: String,
    #[validate(length(max = 800, message = "description must be at most 800 characters long"))]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[validate(length(min = 3, message = "location must be at least 3 characters long"))]
    pub location: String,
    pub cover_photo: Option<String>,
    pub is_private: bool,
    #[validate(custom(function = object_ref_list, message = "organizers must contain valid reference ids"))]
    pub organizers: Vec<String>,
    #[validate(custom(function = object_ref_list, message = "participants must contain valid reference ids"))]
    pub participants: Vec<String>,
}

fn chronological_dates(event: &Event) -> Result<(), ValidationError> {
    if event.end_date < event.start_date {
        let mut error = ValidationError::new("endDate");
        error.message = Some("endDate must not be earlier than startDate".into());
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;
    use crate::utils::validate::error_messages;

    fn sample() -> Event {
        Event {
            id: Uuid::new_v4().to_string(),
            name: "Tech Conference 2026".to_string(),
            description: None,
            start_date: Utc.with_ymd_and_hms(2026, 11, 12, 9, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2026, 11, 12, 17, 0, 0).unwrap(),
            location: "Paris".to_string(),
            cover_photo: None,
            is_private: false,
            organizers: vec![Uuid::new_v4().to_string()],
            participants: Vec::new(),
        }
    }

    #[test]
    fn valid_event_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn short_name_is_rejected() {
        let mut event = sample();
        event.name = "ab".to_string();

        let errors = event.validate().unwrap_err();
        let messages = error_messages(&errors);
        assert!(messages.iter().any(|m| m.contains("name")));
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut event = sample();
        event.end_date = Utc.with_ymd_and_hms(2026, 11, 11, 9, 0, 0).unwrap();

        let errors = event.validate().unwrap_err();
        let messages = error_messages(&errors);
        assert!(messages.iter().any(|m| m.contains("endDate")));
    }

    #[test]
    fn malformed_organizer_reference_is_rejected() {
        let mut event = sample();
        event.organizers.push("not-a-reference".to_string());

        assert!(event.validate().is_err());
    }
}
