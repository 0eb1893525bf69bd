use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

enum Sink {
    Stdout,
    File(Mutex<File>),
}

pub struct Logger {
    prefix: Option<String>,
    sink: Sink,
}

impl Logger {
    fn new(prefix: Option<String>, sink: Sink) -> Self {
        Self { prefix, sink }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let formatted = if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        };

        match &self.sink {
            Sink::Stdout => println!("{}", formatted),
            Sink::File(file) => {
                // A failed log write must not take the game down with it.
                if let Ok(mut file) = file.lock() {
                    let _ = writeln!(file, "{}", formatted);
                }
            }
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix, Sink::Stdout));
}

/// Log to a file instead of stdout. A terminal client drawing in raw mode
/// cannot share stdout with log lines.
pub fn init_file_logger(path: &str, prefix: Option<String>) -> Result<(), String> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Failed to open log file {}: {}", path, e))?;
    LOGGER.get_or_init(|| Logger::new(prefix, Sink::File(Mutex::new(file))));
    Ok(())
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
