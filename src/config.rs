use config::Config as ExternalConfig;
use config::FileFormat;
use serde::{Deserialize, Serialize};
use serde_repr::*;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

///"logging":{
//       "default_level":2,
//       "loggers":[
//          {
//             "component":"record_store::store::record_store",
//             "level":1
//          }
//       ],
//       "retention":14
//    }

#[derive(Debug, Clone, PartialEq, Eq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
    Critical = 5,
    None = 6,
}
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ComponentLogger {
    pub component: String,
    pub level: LogLevel,
}
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub default_level: LogLevel,
    pub loggers: Vec<ComponentLogger>,
    //Days
    pub retention: u32,
}

impl Display for LoggingConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string_pretty(&self) {
            Ok(self_serialized) => write!(f, "\n{self_serialized}"),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

/* -  "workspace_dir": "./workspace",
-  "store_file_name": "data.json",
-  "log_dir": "./log"
*/

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub workspace_dir: PathBuf,
    pub store_file_name: String,
    pub log_dir: PathBuf,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn new() -> Config {
        Config {
            workspace_dir: PathBuf::from("./workspace"),
            store_file_name: String::from("data.json"),
            log_dir: PathBuf::from("./log"),
            logging: LoggingConfig::default(),
        }
    }

    /// Defaults overridden by whatever keys the JSON file at `path` defines.
    /// A missing or unreadable file keeps every default.
    pub fn load(path: &Path) -> Config {
        let defaults = Config::new();
        if !path.exists() {
            log::info!("Config: file {} does not exist, using defaults", path.to_string_lossy());
            return defaults;
        }
        let settings = match ExternalConfig::builder()
            .add_source(config::File::new(&path.to_string_lossy(), FileFormat::Json))
            .build()
        {
            Ok(settings) => settings,
            Err(error) => {
                log::error!("Config: failed reading {}: {}", path.to_string_lossy(), error);
                return defaults;
            }
        };
        Config::settings_to_config(&settings, defaults)
    }

    // settings is external object
    pub(crate) fn settings_to_config(settings: &ExternalConfig, defaults: Config) -> Config {
        let workspace_dir: String = Config::get_value_or_default(
            settings,
            "workspace_dir",
            defaults.workspace_dir.to_string_lossy().to_string(),
        );
        let log_dir: String = Config::get_value_or_default(
            settings,
            "log_dir",
            defaults.log_dir.to_string_lossy().to_string(),
        );
        Config {
            workspace_dir: PathBuf::from(workspace_dir),
            store_file_name: Config::get_value_or_default(settings, "store_file_name", defaults.store_file_name),
            log_dir: PathBuf::from(log_dir),
            logging: Config::get_value_or_default(settings, "logging", defaults.logging),
        }
    }

    fn get_value_or_default<'a, T: Display + Deserialize<'a>>(
        settings: &ExternalConfig,
        key: &str,
        default_value: T,
    ) -> T {
        if let Ok(value) = settings.get(key) {
            log::info!("Config: Got {} value from settings file: {}", key, value);
            value
        } else {
            log::info!("Config: Kept default {} value: {}", key, default_value);
            default_value
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            default_level: LogLevel::Info,
            loggers: vec![],
            retention: 14
        }
    }
}

impl Default for Config { fn default() -> Self { Self::new() } }

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::load(&dir.path().join("config.json")), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "workspace_dir": "/tmp/records",
                "store_file_name": "people.json",
                "logging": {
                    "default_level": 1,
                    "loggers": [{"component": "record_store::store", "level": 4}],
                    "retention": 3
                }
            }"#,
        )
        .unwrap();

        let config = Config::load(&path);
        assert_eq!(config.workspace_dir, PathBuf::from("/tmp/records"));
        assert_eq!(config.store_file_name, "people.json");
        assert_eq!(config.log_dir, PathBuf::from("./log"));
        assert_eq!(config.logging.default_level, LogLevel::Debug);
        assert_eq!(config.logging.retention, 3);
        assert_eq!(config.logging.loggers[0].level, LogLevel::Error);
    }

    #[test]
    fn test_broken_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load(&path), Config::default());
    }
}
