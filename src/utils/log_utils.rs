use std::sync::Once;

// Allows seeing the log::info, warn, debug etc outputs in tests
// Level is the max level such as log::LevelFilter::info
pub fn set_logging_for_tests(level: log::LevelFilter) {
    static MY_LOGGER: MyLogger = MyLogger;
    static INIT: Once = Once::new();
    struct MyLogger;
    impl log::Log for MyLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                println!("{} - {}", record.level(), record.args());
            }
        }
        fn flush(&self) {}
    }
    // Tests run in parallel inside one process, the logger can be installed once
    INIT.call_once(|| {
        if log::set_logger(&MY_LOGGER).is_err() {
            println!("A logger is already installed, keeping it");
        }
    });
    log::set_max_level(level);
}

pub fn size_as_string(size: u64) -> String {
    let size_letters = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];
    let mut index = 0;
    let mut size = size as f64;
    while size > 1024.0 {
        index += 1;
        size /= 1024.0;
        if index >= size_letters.len() {
            return "Unknown".to_string();
        }
    }
    format!("{:.1} {}", size, size_letters[index])
}
