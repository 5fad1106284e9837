use serde_json::{Map, Value};

/// Reserved field carrying the generated identifier of a record.
pub const ID_FIELD: &str = "uuid";

pub type Record = Map<String, Value>;

pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn record_has_id(record: &Record, id: &str) -> bool {
    record.get(ID_FIELD).and_then(Value::as_str) == Some(id)
}

// Only objects carry an identifier
pub fn has_id(record: &Value, id: &str) -> bool {
    record.as_object().map_or(false, |record| record_has_id(record, id))
}

// Shallow merge, values of `new_data` win on conflicting keys
pub fn merge(record: &mut Record, new_data: &Record) {
    for (key, value) in new_data {
        record.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generated_ids_are_uuid_v4() {
        let id = generate_id();
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(id, generate_id());
    }

    #[test]
    fn test_has_id_requires_string_match() {
        let record = json!({"name": "A", "uuid": "42"});
        assert!(has_id(&record, "42"));
        assert!(!has_id(&record, "4"));
        assert!(!has_id(&json!({"uuid": 42}), "42"));
        assert!(!has_id(&json!([1, 2]), "42"));
    }

    #[test]
    fn test_record_has_id_matches_maps() {
        let record = json!({"uuid": "42"}).as_object().unwrap().clone();
        assert!(record_has_id(&record, "42"));
        assert!(!record_has_id(&Record::new(), "42"));
        assert!(has_id(&Value::Object(record), "42"));
    }

    #[test]
    fn test_merge_overwrites_and_keeps_order() {
        let mut record = json!({"name": "A", "age": 21, "uuid": "x"}).as_object().unwrap().clone();
        let new_data = json!({"age": 35, "city": "Pune"}).as_object().unwrap().clone();
        merge(&mut record, &new_data);
        assert_eq!(
            Value::Object(record),
            json!({"name": "A", "age": 35, "uuid": "x", "city": "Pune"})
        );
    }
}
