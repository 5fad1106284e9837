use crate::fs_ops::file_ops::{create_file, delete_file, list_files, read_file, rename_file};
use crate::fs_ops::folder_ops::{create_folder, delete_folder, rename_folder};
use crate::fs_ops::fs_error::FsError;
use crate::store::record::Record;
use crate::store::record_store_trait::RecordStoreTrait;
use colored::Colorize;
use serde_json::json;
use std::path::{Path, PathBuf};

pub const STAGING_FOLDER: &str = "staging";
pub const RECORDS_FOLDER: &str = "records";
pub const ARCHIVE_FILE: &str = "archive.json";

#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub step: &'static str,
    pub result: Result<String, FsError>,
}

impl StepOutcome {
    pub fn status_line(&self) -> String {
        match &self.result {
            Ok(detail) => format!("{} {}: {}", "OK".green().bold(), self.step, detail),
            Err(error) => format!("{} {}: {}", "FAILED".red().bold(), self.step, error),
        }
    }
}

/// Scripted walk through every folder, file and record store operation.
///
/// Each step is logged and recorded; a failing step never stops the flow.
pub struct ExampleFlow<'a> {
    workspace: PathBuf,
    store_file_name: String,
    store: &'a dyn RecordStoreTrait,
    outcomes: Vec<StepOutcome>,
}

impl<'a> ExampleFlow<'a> {
    pub fn new(workspace: &Path, store_file_name: &str, store: &'a dyn RecordStoreTrait) -> ExampleFlow<'a> {
        Self {
            workspace: workspace.to_path_buf(),
            store_file_name: store_file_name.to_string(),
            store,
            outcomes: Vec::new(),
        }
    }

    fn record(&mut self, step: &'static str, result: Result<String, FsError>) -> Option<String> {
        match &result {
            Ok(detail) => log::info!("{step}: {detail}"),
            Err(error) => log::error!("{step} failed: {error}"),
        }
        let value = result.as_ref().ok().cloned();
        self.outcomes.push(StepOutcome { step, result });
        value
    }

    pub fn run(mut self) -> Vec<StepOutcome> {
        let staging = self.workspace.join(STAGING_FOLDER);
        let folder = self.workspace.join(RECORDS_FOLDER);
        let store_path = folder.join(&self.store_file_name);
        let archive_path = folder.join(ARCHIVE_FILE);

        self.record("create folder", create_folder(&staging).map(|_| describe(&staging)));
        self.record("rename folder", rename_folder(&staging, &folder).map(|_| describe(&folder)));
        self.record("create store file", create_file(&store_path, "{}").map(|_| describe(&store_path)));

        let person = match json!({"name": "Mitali", "age": 20, "city": "Banglore"}) {
            serde_json::Value::Object(record) => record,
            _ => Record::new(),
        };
        let id = self.record("append record", self.store.append(&store_path, person));

        if let Some(id) = id {
            let found = self.store.find_by_id(&store_path, &id).and_then(|found| match found {
                Some(record) => Ok(serde_json::Value::Object(record).to_string()),
                None => Err(FsError::NotFound(format!("record {id}"))),
            });
            self.record("find record", found);

            let mut new_data = Record::new();
            new_data.insert("age".to_string(), json!(21));
            let updated = self.store.update_by_id(&store_path, &id, new_data).map(|_| id.clone());
            self.record("update record", updated);

            self.record("read store file", read_file(&store_path));

            let deleted = self.store.delete_by_id(&store_path, &id).map(|_| id.clone());
            self.record("delete record", deleted);
        }

        self.record("list files", list_files(&folder).map(|files| files.join(", ")));
        self.record("rename file", rename_file(&store_path, &archive_path).map(|_| describe(&archive_path)));
        self.record("delete file", delete_file(&archive_path).map(|_| describe(&archive_path)));
        self.record("delete folder", delete_folder(&folder).map(|_| describe(&folder)));

        self.outcomes
    }
}

fn describe(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
