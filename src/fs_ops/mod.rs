pub mod file_ops;
pub mod file_system;
pub mod folder_ops;
pub mod fs_error;
