// src/log.rs
//
// Append-only file log, one file per day under the store directory.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{Local, NaiveDate};

use crate::config::consts::{LOG_PREFIX, STORE_DIR};

static LOG_LOCK: Mutex<()> = Mutex::new(());

/// `.store/log_recipe_scrape_YYYY-MM-DD.txt`
pub fn log_path_for(date: NaiveDate) -> PathBuf {
    PathBuf::from(STORE_DIR).join(format!("{LOG_PREFIX}{}.txt", date.format("%Y-%m-%d")))
}

fn format_line(level: &str, msg: &str) -> String {
    let now = Local::now();
    format!("[{}][{level}] {msg}\n", now.format("%H:%M:%S%.3f"))
}

/// Internal logging function
pub fn write_log(level: &str, msg: &str) {
    let line = format_line(level, msg);

    if cfg!(debug_assertions) && level == "ERROR" {
        eprint!("{line}");
    }

    if let Ok(_guard) = LOG_LOCK.lock() {
        let path = log_path_for(Local::now().date_naive());
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&path) {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_dated() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let p = log_path_for(d);
        assert!(p.starts_with(STORE_DIR));
        assert_eq!(p.file_name().unwrap(), "log_recipe_scrape_2024-03-09.txt");
    }

    #[test]
    fn line_carries_level_and_message() {
        let line = format_line("ERROR", "get_recipes: boom");
        assert!(line.contains("[ERROR] get_recipes: boom"));
        assert!(line.ends_with('\n'));
    }
}
