use std::collections::HashMap;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use mongodb::{
    bson::{doc, Document},
    error::{ErrorKind, WriteFailure},
    Cursor,
    Database,
};

pub async fn collect<T>(mut cursor: Cursor<T>) -> mongodb::error::Result<Vec<T>>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let mut items = Vec::new();

    while let Some(item) = cursor.next().await {
        items.push(item?);
    }

    Ok(items)
}

/// Fetches the referenced records in one `$in` query, projected to the
/// given fields, returned in the order of the input id list. Ids with no
/// backing record are dropped, the way a dangling reference expands to
/// nothing.
pub async fn expand_many(
    db: &Database,
    collection: &str,
    ids: &[String],
    fields: &[&str],
) -> mongodb::error::Result<Vec<Value>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut projection = Document::new();
    for field in fields {
        projection.insert(*field, 1);
    }

    let mut cursor = db
        .collection::<Document>(collection)
        .find(doc! { "_id": { "$in": ids.to_vec() } })
        .projection(projection)
        .await?;

    let mut found = HashMap::new();

    while let Some(document) = cursor.next().await {
        let document = document?;
        if let Ok(id) = document.get_str("_id") {
            let id = id.to_string();
            found.insert(id, serde_json::to_value(&document).unwrap_or(Value::Null));
        }
    }

    Ok(ids.iter().filter_map(|id| found.get(id).cloned()).collect())
}

pub async fn expand_one(
    db: &Database,
    collection: &str,
    id: &str,
    fields: &[&str],
) -> mongodb::error::Result<Value> {
    let mut projection = Document::new();
    for field in fields {
        projection.insert(*field, 1);
    }

    let document = db
        .collection::<Document>(collection)
        .find_one(doc! { "_id": id })
        .projection(projection)
        .await?;

    Ok(match document {
        Some(document) => serde_json::to_value(&document).unwrap_or(Value::Null),
        None => Value::Null,
    })
}

pub fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match *error.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => {
            write_error.code == 11000
        }
        _ => false,
    }
}
