//! エラー型

use thiserror::Error;

/// アプリ全体のエラー
///
/// ユーザー向けの表示は呼び出し側で1つのメッセージにまとめるが、
/// トレースログには種類ごとに記録する。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CareerError {
    #[error("validation failed: {0}")]
    Validation(&'static str),

    #[error("fetch失敗: {0}")]
    Transport(String),

    #[error("APIエラー: {0}")]
    Http(u16),

    #[error("JSONパース失敗: {0}")]
    Decode(String),

    #[error("Your browser does not support voice input.")]
    VoiceUnsupported,

    #[error("Voice recognition error: {0}")]
    Recognition(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("saved job index {index} out of range (len {len})")]
    StaleIndex { index: usize, len: usize },
}

impl CareerError {
    /// ログのカテゴリ分けに使う短い種別名
    pub fn kind(&self) -> &'static str {
        match self {
            CareerError::Validation(_) => "validation",
            CareerError::Transport(_) => "transport",
            CareerError::Http(_) => "http",
            CareerError::Decode(_) => "decode",
            CareerError::VoiceUnsupported => "voice-unsupported",
            CareerError::Recognition(_) => "recognition",
            CareerError::Storage(_) => "storage",
            CareerError::StaleIndex { .. } => "stale-index",
        }
    }
}

impl From<serde_json::Error> for CareerError {
    fn from(e: serde_json::Error) -> Self {
        CareerError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_messages_match_ui_text() {
        assert_eq!(
            CareerError::VoiceUnsupported.to_string(),
            "Your browser does not support voice input."
        );
        assert_eq!(
            CareerError::Recognition("no-speech".into()).to_string(),
            "Voice recognition error: no-speech"
        );
    }

    #[test]
    fn test_kinds_are_distinct() {
        let errors = [
            CareerError::Validation("empty"),
            CareerError::Transport("x".into()),
            CareerError::Http(500),
            CareerError::Decode("x".into()),
            CareerError::VoiceUnsupported,
            CareerError::Recognition("x".into()),
            CareerError::Storage("x".into()),
            CareerError::StaleIndex { index: 1, len: 0 },
        ];
        let mut kinds: Vec<_> = errors.iter().map(|e| e.kind()).collect();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }
}
