use std::collections::HashMap;
use futures::StreamExt;
use serde_json::{json, Value};
use mongodb::bson::{doc, Bson};
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::mongo::collect;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse};
use crate::model::Poll;

pub async fn task(
    path: web::Path<String>
) -> Result<HttpResponse, Error> {
    let poll_id = path.into_inner();
    let db = MongoDB.connect();

    let collection = db.collection::<Poll::Question>("questions");
    let result = collection.find(doc!{ "poll": &poll_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let questions = match collect(result.unwrap()).await {
        Ok(questions) => questions,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }
    };

    if questions.is_empty() {
        return Ok(Response::ok(&Vec::<Value>::new()));
    }

    let question_ids: Vec<String> = questions.iter().map(|q| q.id.clone()).collect();

    let collection = db.collection::<Poll::Answer>("answers");
    let result = collection.find(doc!{ "question": { "$in": question_ids } }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error());
    }

    let answers = match collect(result.unwrap()).await {
        Ok(answers) => answers,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }
    };

    // One grouped aggregation instead of a count query per answer.
    let counts = match tally_votes(&db, &answers).await {
        Ok(counts) => counts,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error());
        }
    };

    Ok(Response::ok(&assemble_results(&questions, &answers, &counts)))
}

async fn tally_votes(
    db: &mongodb::Database,
    answers: &[Poll::Answer],
) -> mongodb::error::Result<HashMap<String, i64>> {
    let mut counts = HashMap::new();

    if answers.is_empty() {
        return Ok(counts);
    }

    let answer_ids: Vec<String> = answers.iter().map(|a| a.id.clone()).collect();

    let pipeline = vec![
        doc! { "$match": { "selectedAnswer": { "$in": answer_ids } } },
        doc! { "$group": { "_id": "$selectedAnswer", "votes": { "$sum": 1 } } },
    ];

    let mut cursor = db.collection::<Poll::Vote>("votes").aggregate(pipeline).await?;

    while let Some(document) = cursor.next().await {
        let document = document?;

        let answer_id = document.get_str("_id").unwrap_or_default().to_string();
        let votes = match document.get("votes") {
            Some(Bson::Int64(votes)) => *votes,
            Some(Bson::Int32(votes)) => *votes as i64,
            _ => 0,
        };

        counts.insert(answer_id, votes);
    }

    Ok(counts)
}

// Nested [{question, results: [{answer, votes}]}] in query order; answers
// nobody voted for report 0.
fn assemble_results(
    questions: &[Poll::Question],
    answers: &[Poll::Answer],
    counts: &HashMap<String, i64>,
) -> Vec<Value> {
    questions
        .iter()
        .map(|question| {
            let stats: Vec<Value> = answers
                .iter()
                .filter(|answer| answer.question == question.id)
                .map(|answer| json!({
                    "answer": answer.text,
                    "votes": counts.get(&answer.id).copied().unwrap_or(0),
                }))
                .collect();

            json!({ "question": question.text, "results": stats })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, text: &str) -> Poll::Question {
        Poll::Question {
            id: id.to_string(),
            poll: "p1".to_string(),
            text: text.to_string(),
            created_at: 1,
        }
    }

    fn answer(id: &str, question: &str, text: &str) -> Poll::Answer {
        Poll::Answer {
            id: id.to_string(),
            question: question.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn no_questions_yields_empty_list() {
        let results = assemble_results(&[], &[], &HashMap::new());
        assert!(results.is_empty());
    }

    #[test]
    fn nested_structure_follows_creation_order_with_zero_fills() {
        let questions = vec![
            question("q1", "Which meal do you prefer?"),
            question("q2", "Which venue works best?"),
        ];
        let answers = vec![
            answer("a1", "q1", "Vegetarian"),
            answer("a2", "q1", "Barbecue"),
            answer("a3", "q2", "Rooftop"),
        ];

        let mut counts = HashMap::new();
        counts.insert("a1".to_string(), 2);
        counts.insert("a2".to_string(), 1);

        let results = assemble_results(&questions, &answers, &counts);

        assert_eq!(
            results,
            vec![
                json!({
                    "question": "Which meal do you prefer?",
                    "results": [
                        { "answer": "Vegetarian", "votes": 2 },
                        { "answer": "Barbecue", "votes": 1 },
                    ],
                }),
                json!({
                    "question": "Which venue works best?",
                    "results": [
                        { "answer": "Rooftop", "votes": 0 },
                    ],
                }),
            ]
        );
    }

    #[test]
    fn question_without_answers_reports_empty_results() {
        let questions = vec![question("q1", "Which meal do you prefer?")];
        let results = assemble_results(&questions, &[], &HashMap::new());

        assert_eq!(
            results,
            vec![json!({ "question": "Which meal do you prefer?", "results": [] })]
        );
    }
}
