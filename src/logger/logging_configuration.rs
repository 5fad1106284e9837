extern crate chrono;

use crate::config::{Config, LogLevel, LoggingConfig};
use crate::logger::store_file_logger::StoreFileSink;
use chrono::offset::Utc;
use chrono::DateTime;
use spdlog::sink::{Sink, StdStream, StdStreamSink};
use spdlog::{ErrorHandler, LevelFilter};
use std::fmt::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use spdlog::{
    formatter::{FmtExtraInfo, Formatter},
    prelude::*,
    Record, StringBuf,
};

#[derive(Clone, Default)]
pub struct StoreFormatter;

impl Formatter for StoreFormatter {
    fn format(&self, record: &Record, dest: &mut StringBuf) -> spdlog::Result<FmtExtraInfo> {
        let (source_file, module_path) = match record.source_location() {
            None => ("", ""),
            Some(location) => (location.file_name(), location.module_path()),
        };
        let datetime: DateTime<Utc> = record.time().into();
        write!(dest, "{}", datetime.format("%Y-%m-%dT%T%.3fZ"))
            .map_err(spdlog::Error::FormatRecord)?;
        let style_range_begin: usize = dest.len();
        write!(dest, " [{}] ", &record.level().as_str().to_ascii_uppercase()).map_err(spdlog::Error::FormatRecord)?;
        write!(dest, "[{}] ", thread_id::get()).map_err(spdlog::Error::FormatRecord)?;
        let style_range_end: usize = dest.len();
        writeln!(dest, "({}::{}) {}", module_path, source_file, record.payload(), ).map_err(spdlog::Error::FormatRecord)?;
        Ok(FmtExtraInfo::builder()
            .style_range(style_range_begin..style_range_end)
            .build())
    }

    fn clone_box(&self) -> Box<dyn Formatter> {
        Box::new(self.clone())
    }
}

/// Routes the `log` macros through spdlog, once per process.
pub fn log_configure(config: &Config) {
    if let Err(error) = spdlog::init_log_crate_proxy() {
        println!("The log crate proxy is already initialized: {error}");
    }
    configure_logging(config.logging.clone(), &config.log_dir)
}

pub fn configure_logging(config: LoggingConfig, log_dir: &Path) {
    let new_formatter: Box<StoreFormatter> = Box::default();

    let store_sink = match StoreSink::new(config, log_dir) {
        Ok(sink) => Arc::new(sink),
        Err(error) => {
            println!("Error occurred while creating the logging sink: {error}");
            return;
        }
    };
    store_sink.set_formatter(new_formatter);
    let logger: Arc<Logger> = match Logger::builder().sink(store_sink).build() {
        Ok(logger) => Arc::new(logger),
        Err(error) => {
            println!("Error occurred while creating the logger: {error}");
            return;
        }
    };
    logger.set_flush_period(Some(Duration::from_secs(1)));

    let proxy: &'static spdlog::LogCrateProxy = spdlog::log_crate_proxy();
    log::set_max_level(log::LevelFilter::Trace);
    logger.set_level_filter(LevelFilter::All);
    proxy.swap_logger(Some(logger));
}

struct StoreSink {
    std_sink: StdStreamSink,
    file_sink: StoreFileSink,
    config: LoggingConfig,
}

impl StoreSink {
    fn new(config: LoggingConfig, log_dir: &Path) -> Result<StoreSink, String> {
        let std_sink = StdStreamSink::builder()
            .std_stream(StdStream::Stdout)
            .build()
            .map_err(|error| format!("stdout sink: {error}"))?;
        let file_sink = StoreFileSink::new(log_dir, config.retention)?;
        Ok(Self {
            std_sink,
            config,
            file_sink,
        })
    }
    fn should_log(&self, module: &str, source_path: &str, record_level: spdlog::Level) -> bool {
        let source_path_with_file = format!("{module}::{source_path}");
        match self
            .config
            .loggers
            .iter()
            .find(|logger| logger.component == module || logger.component == source_path_with_file)
        {
            None => StoreSink::compare(record_level, self.config.default_level.clone()),
            Some(component_logger) => {
                StoreSink::compare(record_level, component_logger.level.clone())
            }
        }
    }
    pub const fn spd_level_to_u16(spd_level: Level) -> u16 {
        match spd_level {
            Level::Critical => 5,
            Level::Error => 4,
            Level::Warn => 3,
            Level::Info => 2,
            Level::Debug => 1,
            Level::Trace => 0,
        }
    }
    // config_level comes from the store config, level is the spdlog level
    pub fn compare(level: Level, config_level: LogLevel) -> bool {
        if config_level == LogLevel::None {
            return false;
        }
        let level_num: u16 = StoreSink::spd_level_to_u16(level);
        let config_level_num: u16 = config_level as u16;
        config_level_num <= level_num
    }
}

impl Sink for StoreSink {
    fn log(&self, record: &Record) -> spdlog::Result<()> {
        let (source_file, module_path) = match record.source_location() {
            None => ("", ""),
            Some(location) => (location.file_name(), location.module_path()),
        };
        if self.should_log(module_path, source_file, record.level()) {
            let std_result = self.std_sink.log(record);
            let file_result = self.file_sink.log(record);
            match (std_result, file_result) {
                (Err(_std_error), Err(file_error)) => Err(file_error),
                _ => Ok(()),
            }
        } else {
            Ok(())
        }
    }

    fn flush(&self) -> spdlog::Result<()> {
        let std_result = self.std_sink.flush();
        let file_result = self.file_sink.flush();
        match (std_result, file_result) {
            (Err(std_error), Err(file_error)) => {
                println!("Failed flushing all sinks std_error: {std_error} file_error: {file_error}");
                Err(file_error)
            }
            _ => Ok(()),
        }
    }

    fn level_filter(&self) -> LevelFilter {
        self.std_sink.level_filter()
    }

    fn set_level_filter(&self, level_filter: LevelFilter) {
        self.std_sink.set_level_filter(level_filter);
        self.file_sink.set_level_filter(level_filter);
    }

    fn set_formatter(&self, formatter: Box<dyn Formatter>) {
        self.std_sink.set_formatter(formatter.clone_box());
        self.file_sink.set_formatter(formatter)
    }

    fn set_error_handler(&self, handler: Option<ErrorHandler>) {
        self.std_sink.set_error_handler(handler);
        self.file_sink.set_error_handler(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComponentLogger;
    use tempfile::tempdir;

    #[test]
    fn test_level_comparison() {
        assert!(StoreSink::compare(Level::Error, LogLevel::Info));
        assert!(StoreSink::compare(Level::Info, LogLevel::Info));
        assert!(!StoreSink::compare(Level::Debug, LogLevel::Info));
        assert!(!StoreSink::compare(Level::Critical, LogLevel::None));
    }

    #[test]
    fn test_component_level_overrides_default() {
        let dir = tempdir().unwrap();
        let config = LoggingConfig {
            default_level: LogLevel::Warning,
            loggers: vec![ComponentLogger {
                component: "record_store::store::record_store".to_string(),
                level: LogLevel::Debug,
            }],
            retention: 14,
        };
        let sink = StoreSink::new(config, dir.path()).unwrap();
        assert!(sink.should_log("record_store::store::record_store", "record_store.rs", Level::Debug));
        assert!(!sink.should_log("record_store::fs_ops::file_ops", "file_ops.rs", Level::Info));
        assert!(sink.should_log("record_store::fs_ops::file_ops", "file_ops.rs", Level::Error));
    }
}
