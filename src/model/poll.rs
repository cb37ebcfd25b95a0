use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::validate::object_ref;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(custom(function = object_ref, message = "event must be a valid reference id"))]
    pub event: String,
    #[validate(length(min = 3, message = "title must be at least 3 characters long"))]
    pub title: String,
    #[validate(custom(function = object_ref, message = "createdBy must be a valid reference id"))]
    pub created_by: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(custom(function = object_ref, message = "poll must be a valid reference id"))]
    pub poll: String,
    #[validate(length(min = 5, message = "text must be at least 5 characters long"))]
    pub text: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(custom(function = object_ref, message = "question must be a valid reference id"))]
    pub question: String,
    #[validate(length(min = 1, max = 300, message = "text must be between 1 and 300 characters"))]
    pub text: String,
}

// One vote per (question, user), backed by the unique index created at
// startup.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(custom(function = object_ref, message = "question must be a valid reference id"))]
    pub question: String,
    #[validate(custom(function = object_ref, message = "selectedAnswer must be a valid reference id"))]
    pub selected_answer: String,
    #[validate(custom(function = object_ref, message = "user must be a valid reference id"))]
    pub user: String,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use crate::utils::validate::error_messages;

    fn reference() -> String {
        Uuid::new_v4().to_string()
    }

    #[test]
    fn valid_poll_passes() {
        let poll = Poll {
            id: reference(),
            event: reference(),
            title: "Catering preferences".to_string(),
            created_by: reference(),
            created_at: 1,
        };

        assert!(poll.validate().is_ok());
    }

    #[test]
    fn short_title_reports_title_error() {
        let poll = Poll {
            id: reference(),
            event: reference(),
            title: "ab".to_string(),
            created_by: reference(),
            created_at: 1,
        };

        let errors = poll.validate().unwrap_err();
        let messages = error_messages(&errors);
        assert!(messages.iter().any(|m| m.contains("title")));
    }

    #[test]
    fn malformed_poll_references_are_rejected() {
        let poll = Poll {
            id: reference(),
            event: "67204deeb6121b8d0b9a58d1x".to_string(),
            title: "Catering preferences".to_string(),
            created_by: reference(),
            created_at: 1,
        };

        assert!(poll.validate().is_err());
    }

    #[test]
    fn question_text_minimum_is_five() {
        let mut question = Question {
            id: reference(),
            poll: reference(),
            text: "Why?".to_string(),
            created_at: 1,
        };

        assert!(question.validate().is_err());

        question.text = "Which meal do you prefer?".to_string();
        assert!(question.validate().is_ok());
    }

    #[test]
    fn answer_text_bounds_are_one_and_three_hundred() {
        let mut answer = Answer {
            id: reference(),
            question: reference(),
            text: String::new(),
        };

        assert!(answer.validate().is_err());

        answer.text = "a".repeat(300);
        assert!(answer.validate().is_ok());

        answer.text = "a".repeat(301);
        assert!(answer.validate().is_err());
    }

    #[test]
    fn vote_requires_well_formed_references() {
        let vote = Vote {
            id: reference(),
            question: reference(),
            selected_answer: "bogus".to_string(),
            user: reference(),
            created_at: 1,
        };

        assert!(vote.validate().is_err());
    }
}
