//! ユーティリティモジュール

pub mod api;
pub mod log_trace;
pub mod sequence;
pub mod storage;
pub mod voice;
