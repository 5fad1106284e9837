use crate::fs_ops::fs_error::FsError;
use crate::store::record::Record;
use mockall::automock;
use std::path::Path;

#[automock]
pub trait RecordStoreTrait {
    fn create_store(&self, file_path: &Path) -> Result<(), FsError>;
    fn append(&self, file_path: &Path, data: Record) -> Result<String, FsError>;
    fn read_all(&self, file_path: &Path) -> Result<Vec<Record>, FsError>;
    fn find_by_id(&self, file_path: &Path, id: &str) -> Result<Option<Record>, FsError>;
    fn delete_by_id(&self, file_path: &Path, id: &str) -> Result<(), FsError>;
    fn update_by_id(&self, file_path: &Path, id: &str, new_data: Record) -> Result<(), FsError>;
}
