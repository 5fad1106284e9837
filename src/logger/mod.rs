pub mod logging_configuration;
pub mod store_file_logger;
