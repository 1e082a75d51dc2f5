//! 時系列トレースログ
//! 検索・保存・音声入力の各イベントをカテゴリ付きで記録する

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const MAX_LOG_ENTRIES: usize = 1000;
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "career_compass_log_trace";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: Level,
    pub category: String, // "search", "hf-search", "saved-jobs", "voice", ...
    pub message: String,
    pub data: Option<serde_json::Value>,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
}

impl LogTrace {
    pub fn new() -> Self {
        let mut trace = LogTrace {
            logs: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        };
        trace.load_from_storage();
        trace
    }

    pub fn log(&mut self, level: Level, category: &str, message: &str, data: Option<serde_json::Value>) {
        let entry = LogEntry {
            timestamp: now_iso(),
            level,
            category: category.to_string(),
            message: message.to_string(),
            data,
        };

        write_console(level, &format!("[{}] {}", category, message));

        if self.logs.len() >= MAX_LOG_ENTRIES {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);

        self.save_to_storage();
    }

    pub fn get_logs(&self) -> Vec<LogEntry> {
        self.logs.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.logs.clear();
        self.save_to_storage();
    }

    #[cfg(target_arch = "wasm32")]
    fn load_from_storage(&mut self) {
        use crate::utils::storage::{KeyValueStore, LocalStorage};
        if let Some(json_str) = LocalStorage.get(STORAGE_KEY) {
            if let Ok(logs) = serde_json::from_str::<Vec<LogEntry>>(&json_str) {
                self.logs = logs.into_iter().collect();
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_from_storage(&mut self) {}

    #[cfg(target_arch = "wasm32")]
    fn save_to_storage(&self) {
        use crate::utils::storage::{KeyValueStore, LocalStorage};
        let json_str = serde_json::to_string(&self.logs).unwrap_or_else(|_| "[]".to_string());
        let _ = LocalStorage.set(STORAGE_KEY, &json_str);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save_to_storage(&self) {}
}

impl Default for LogTrace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_iso() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Debug => web_sys::console::debug_1(&line.into()),
        Level::Info => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, _line: &str) {}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new());
}

pub fn log_debug(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(Level::Debug, category, message, None));
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(Level::Info, category, message, None));
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(Level::Info, category, message, Some(data)));
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(Level::Warn, category, message, None));
}

pub fn log_error_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log(Level::Error, category, message, Some(data)));
}

pub fn recent_logs() -> Vec<LogEntry> {
    LOG_TRACE.with(|trace| trace.borrow().get_logs())
}

pub fn clear_logs() {
    LOG_TRACE.with(|trace| trace.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut trace = LogTrace::new();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            trace.log(Level::Info, "test", &format!("entry {}", i), None);
        }
        let logs = trace.get_logs();
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "entry 5");
    }

    #[test]
    fn test_global_helpers_record_category() {
        clear_logs();
        log_warn("voice", "unsupported");
        let logs = recent_logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].level, Level::Warn);
        assert_eq!(logs[0].category, "voice");
        let json = serde_json::to_string(&logs[0]).unwrap();
        assert!(json.contains("\"level\":\"warn\""));
    }
}
