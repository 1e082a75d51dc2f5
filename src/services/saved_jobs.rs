//! 保存済みジョブ管理
//!
//! `savedJobs` キーにJSON配列で保存する。名前の重複は追加時に弾く。

use std::rc::Rc;

use crate::error::CareerError;
use crate::models::{messages, CareerRecord, Notice, ResultsPanel};
use crate::utils::log_trace::{log_info, log_warn};
use crate::utils::storage::{KeyValueStore, SAVED_JOBS_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(String),
    AlreadySaved(String),
}

pub struct SavedJobs {
    store: Rc<dyn KeyValueStore>,
}

impl SavedJobs {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        SavedJobs { store }
    }

    /// 保存リストを読み込む（未保存・破損時は空）
    pub fn list(&self) -> Vec<CareerRecord> {
        let Some(json) = self.store.get(SAVED_JOBS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&json) {
            Ok(jobs) => jobs,
            Err(e) => {
                log_warn("saved-jobs", &format!("保存データが読めないため空として扱う: {}", e));
                Vec::new()
            }
        }
    }

    fn persist(&self, jobs: &[CareerRecord]) -> Result<(), CareerError> {
        let json = serde_json::to_string(jobs)?;
        self.store.set(SAVED_JOBS_KEY, &json)
    }

    /// 同名がなければ末尾に追加して保存
    pub fn save(&self, record: CareerRecord) -> Result<SaveOutcome, CareerError> {
        let mut jobs = self.list();
        if jobs.iter().any(|j| j.name == record.name) {
            log_info("saved-jobs", &format!("保存済み: {}", record.name));
            return Ok(SaveOutcome::AlreadySaved(record.name));
        }
        let name = record.name.clone();
        jobs.push(record);
        self.persist(&jobs)?;
        log_info("saved-jobs", &format!("保存: {} ({}件)", name, jobs.len()));
        Ok(SaveOutcome::Saved(name))
    }

    /// 表示中の位置で削除し、削除したレコードを返す
    pub fn delete(&self, index: usize) -> Result<CareerRecord, CareerError> {
        let mut jobs = self.list();
        if index >= jobs.len() {
            return Err(CareerError::StaleIndex { index, len: jobs.len() });
        }
        let removed = jobs.remove(index);
        self.persist(&jobs)?;
        log_info("saved-jobs", &format!("削除: {} ({}件)", removed.name, jobs.len()));
        Ok(removed)
    }

    pub fn show_saved_jobs(&self) -> ResultsPanel {
        ResultsPanel::Saved(self.list())
    }
}

/// 保存結果 → 通知
pub fn save_notice(result: &Result<SaveOutcome, CareerError>) -> Notice {
    match result {
        Ok(SaveOutcome::Saved(name)) => Notice::success(format!("{} saved!", name)),
        Ok(SaveOutcome::AlreadySaved(_)) => Notice::info(messages::ALREADY_SAVED),
        Err(e) => Notice::error(e.to_string()),
    }
}

/// 削除結果 → 通知
pub fn delete_notice(result: &Result<CareerRecord, CareerError>) -> Notice {
    match result {
        Ok(removed) => Notice::success(format!("{} removed", removed.name)),
        Err(e) => Notice::error(e.to_string()),
    }
}
