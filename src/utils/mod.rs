pub mod file_utils;
pub mod log_utils;
