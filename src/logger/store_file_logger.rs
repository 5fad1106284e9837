extern crate chrono;

use crate::logger::logging_configuration::StoreFormatter;
use chrono::{DateTime, Utc};
use spdlog::sink::Sink;
use spdlog::Record;
use spdlog::{formatter::Formatter, ErrorHandler, LevelFilter};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, SystemTime};

pub const LOG_FILE_NAME: &str = "record_store.log";

pub struct StoreFileSink {
    file_ref: Mutex<fs::File>,
    formatter: Box<dyn Formatter>,
}

impl StoreFileSink {
    pub fn new(logs_dir: &Path, retention_days: u32) -> Result<Self, String> {
        fs::create_dir_all(logs_dir)
            .map_err(|e| format!("Failed creating log dir {}: {}", logs_dir.to_string_lossy(), e))?;
        let file_log_path = logs_dir.join(LOG_FILE_NAME);
        StoreFileSink::apply_retention_policy(&file_log_path, retention_days, SystemTime::now());
        let file_ref = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_log_path)
            .map_err(|e| format!("Failed opening {} file {}", file_log_path.to_string_lossy(), e))?;
        Ok(Self {
            file_ref: Mutex::new(file_ref),
            formatter: Box::new(StoreFormatter),
        })
    }

    fn epoch_to_date(time: SystemTime) -> String {
        let datetime = DateTime::<Utc>::from(time);
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    fn file_age_reference(log_path: &Path) -> Option<SystemTime> {
        let metadata = fs::metadata(log_path).ok()?;
        metadata.created().or_else(|_| metadata.modified()).ok()
    }

    // Clears the whole log folder once the log file is older than the retention
    fn apply_retention_policy(log_path: &Path, retention_days: u32, now: SystemTime) -> bool {
        if !log_path.exists() {
            return false;
        }
        let retention = Duration::from_secs((retention_days as u64) * 24 * 60 * 60);
        let retention_limit = match now.checked_sub(retention) {
            Some(limit) => limit,
            None => return false,
        };
        let file_create_time = match StoreFileSink::file_age_reference(log_path) {
            Some(time) => time,
            None => return false,
        };
        if file_create_time >= retention_limit {
            return false;
        }
        println!(
            "Log retention applied: file_create_time {} retention_limit {}",
            StoreFileSink::epoch_to_date(file_create_time),
            StoreFileSink::epoch_to_date(retention_limit)
        );
        let logs_dir: PathBuf = match log_path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => return false,
        };
        match fs::remove_dir_all(&logs_dir).and_then(|_| fs::create_dir_all(&logs_dir)) {
            Ok(_) => true,
            Err(error) => {
                println!("Failed clearing {}: {}", logs_dir.to_string_lossy(), error);
                false
            }
        }
    }

    fn file(&self) -> MutexGuard<'_, fs::File> {
        match self.file_ref.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Sink for StoreFileSink {
    fn log(&self, record: &Record) -> spdlog::Result<()> {
        let mut dest = String::new();
        self.formatter.format(record, &mut dest)?;
        self.file()
            .write_all(dest.as_bytes())
            .map_err(spdlog::Error::WriteRecord)
    }

    fn flush(&self) -> spdlog::Result<()> {
        self.file().sync_all().map_err(spdlog::Error::FlushBuffer)
    }

    fn level_filter(&self) -> LevelFilter {
        LevelFilter::All
    }

    fn set_level_filter(&self, _level_filter: LevelFilter) {}

    fn set_formatter(&self, _formatter: Box<dyn Formatter>) {}

    fn set_error_handler(&self, _handler: Option<ErrorHandler>) {}
}
