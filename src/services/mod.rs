//! 検索・保存などの画面に依存しない処理

pub mod saved_jobs;
pub mod search;

pub use saved_jobs::{delete_notice, save_notice, SavedJobs};
pub use search::SearchService;
