use crate::fs_ops::file_system::FileSystem;
use crate::fs_ops::fs_error::FsError;
use crate::store::record::{self, has_id, record_has_id, Record, ID_FIELD};
use crate::store::record_store_trait::RecordStoreTrait;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// JSON array of records kept in a single file.
///
/// Every operation reads the whole file, works on the parsed array in memory
/// and, when it mutates, overwrites the whole file. There is no locking: two
/// operations racing on the same path can interleave their read and write,
/// and the last writer wins.
pub struct RecordStore {
    file_system: FileSystem,
    generate_id: fn() -> String,
}

impl RecordStore {
    pub fn new() -> RecordStore {
        Self { file_system: FileSystem::new(), generate_id: record::generate_id }
    }

    pub fn with_file_system(file_system: FileSystem, generate_id: fn() -> String) -> RecordStore {
        Self { file_system, generate_id }
    }

    fn load(&self, file_path: &Path) -> Result<Vec<Value>, FsError> {
        let content = (self.file_system.read_function)(file_path)?;
        let json: Value = serde_json::from_str(&content).map_err(|err| {
            FsError::ParseError(format!("{} is not valid JSON: {}", file_path.to_string_lossy(), err))
        })?;
        match json {
            Value::Array(records) => Ok(records),
            // `{}` is the sentinel of a freshly created store, anything else is reported
            Value::Object(ref object) if object.is_empty() => Ok(Vec::new()),
            other => {
                log::warn!(
                    "Store {} does not hold a JSON array ({}), treating it as an empty record list",
                    file_path.to_string_lossy(),
                    json_kind(&other)
                );
                Ok(Vec::new())
            }
        }
    }

    // A failure here is on the write side, never a parse of the stored content
    fn serialize<T: Serialize>(file_path: &Path, content: &T) -> Result<String, FsError> {
        serde_json::to_string_pretty(content).map_err(|err| {
            FsError::IOError(format!("failed serializing {}: {}", file_path.to_string_lossy(), err))
        })
    }

    fn save(&self, file_path: &Path, records: Vec<Value>) -> Result<(), FsError> {
        let content = RecordStore::serialize(file_path, &records)?;
        (self.file_system.write_function)(file_path, &content)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStoreTrait for RecordStore {
    fn create_store(&self, file_path: &Path) -> Result<(), FsError> {
        let content = RecordStore::serialize(file_path, &Vec::<Value>::new())?;
        (self.file_system.create_new_function)(file_path, &content)?;
        log::info!("Created empty store {}", file_path.to_string_lossy());
        Ok(())
    }

    fn append(&self, file_path: &Path, data: Record) -> Result<String, FsError> {
        let id = (self.generate_id)();
        let mut new_record = data;
        if new_record.contains_key(ID_FIELD) {
            log::warn!("Appended data carries its own {ID_FIELD}, it is replaced by {id}");
        }
        new_record.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        let mut records = self.load(file_path)?;
        records.push(Value::Object(new_record));
        self.save(file_path, records)?;
        log::info!("Record {} appended to {}", id, file_path.to_string_lossy());
        Ok(id)
    }

    fn read_all(&self, file_path: &Path) -> Result<Vec<Record>, FsError> {
        let records = self.load(file_path)?;
        Ok(records
            .into_iter()
            .filter_map(|record| match record {
                Value::Object(record) => Some(record),
                _ => None,
            })
            .collect())
    }

    fn find_by_id(&self, file_path: &Path, id: &str) -> Result<Option<Record>, FsError> {
        let records = self.load(file_path)?;
        let found = records
            .iter()
            .find(|record| has_id(record, id))
            .and_then(Value::as_object)
            .cloned();
        if found.is_none() {
            log::info!("Record {} not found in {}", id, file_path.to_string_lossy());
        }
        Ok(found)
    }

    fn delete_by_id(&self, file_path: &Path, id: &str) -> Result<(), FsError> {
        let records = self.load(file_path)?;
        let before = records.len();
        // Every match goes, duplicated ids included
        let remaining: Vec<Value> = records
            .into_iter()
            .filter(|record| !has_id(record, id))
            .collect();
        let removed = before - remaining.len();
        self.save(file_path, remaining)?;
        log::info!("Deleted {} record(s) with id {} from {}", removed, id, file_path.to_string_lossy());
        Ok(())
    }

    fn update_by_id(&self, file_path: &Path, id: &str, new_data: Record) -> Result<(), FsError> {
        if new_data.contains_key(ID_FIELD) {
            log::warn!("Update of {} overwrites the {ID_FIELD} field", id);
        }
        let records = self.load(file_path)?;
        let mut updated = 0;
        let records: Vec<Value> = records
            .into_iter()
            .map(|record| match record {
                Value::Object(mut object) if record_has_id(&object, id) => {
                    record::merge(&mut object, &new_data);
                    updated += 1;
                    Value::Object(object)
                }
                other => other,
            })
            .collect();
        self.save(file_path, records)?;
        log::info!("Updated {} record(s) with id {} in {}", updated, id, file_path.to_string_lossy());
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
