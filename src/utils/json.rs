use serde_json::{Map, Value};

/// Rewrites the store's `_id` key to `id` at every depth. Applied to every
/// response body by the `Response` helpers, so no handler renames ids
/// itself.
pub fn expose_id(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, inner) in map {
                let key = if key == "_id" { "id".to_string() } else { key };
                out.insert(key, expose_id(inner));
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(expose_id).collect())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renames_top_level_id() {
        let value = expose_id(json!({ "_id": "abc", "title": "Picnic" }));
        assert_eq!(value, json!({ "id": "abc", "title": "Picnic" }));
    }

    #[test]
    fn renames_nested_and_array_ids() {
        let value = expose_id(json!([
            {
                "_id": "e1",
                "organizers": [
                    { "_id": "u1", "firstname": "Ada" },
                    { "_id": "u2", "firstname": "Grace" }
                ]
            }
        ]));

        assert_eq!(
            value,
            json!([
                {
                    "id": "e1",
                    "organizers": [
                        { "id": "u1", "firstname": "Ada" },
                        { "id": "u2", "firstname": "Grace" }
                    ]
                }
            ])
        );
    }

    #[test]
    fn leaves_scalars_and_other_keys_alone() {
        let value = expose_id(json!({ "votes": 3, "answer": "Veggie" }));
        assert_eq!(value, json!({ "votes": 3, "answer": "Veggie" }));
    }
}
