//! データ構造体モジュール

use serde::{Deserialize, Serialize};

// ============================================
// キャリアレコード
// ============================================

/// バックエンドが返す1件のキャリア情報
///
/// `name` が実質的なIDで、保存リストの重複判定にも使う。
/// それ以外のフィールドは欠落・`null` のどちらでも「なし」として扱う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advantages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disadvantages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<RequiredSkills>,
    /// データセットのカテゴリ（AI検索側が付与）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
impl CareerRecord {
    pub fn named(name: impl Into<String>) -> Self {
        CareerRecord {
            name: name.into(),
            overview: None,
            advantages: None,
            disadvantages: None,
            demand: None,
            required_skills: None,
            category: None,
        }
    }
}

/// 必要スキル（レベル別）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RequiredSkills {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intermediate: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional: Option<Vec<String>>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Advanced,
    Professional,
}

impl SkillLevel {
    /// 表示順
    pub const ORDER: [SkillLevel; 4] = [
        SkillLevel::Basic,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Professional,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Basic => "Basic",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Professional => "Professional",
        }
    }
}

impl RequiredSkills {
    pub fn level(&self, level: SkillLevel) -> Option<&[String]> {
        let list = match level {
            SkillLevel::Basic => &self.basic,
            SkillLevel::Intermediate => &self.intermediate,
            SkillLevel::Advanced => &self.advanced,
            SkillLevel::Professional => &self.professional,
        };
        list.as_deref()
    }
}

// ============================================
// リクエストボディ
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordQuery {
    pub interest: String,
    pub skills: String,
    pub job: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiQuery {
    pub query: String,
}

// ============================================
// UI状態
// ============================================

/// 入力欄
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputField {
    Interest,
    Skills,
    Job,
    HfQuery,
}

impl InputField {
    pub fn id(self) -> &'static str {
        match self {
            InputField::Interest => "interest",
            InputField::Skills => "skills",
            InputField::Job => "job",
            InputField::HfQuery => "hfQuery",
        }
    }
}

/// 固定メッセージ
pub mod messages {
    pub const KEYWORD_EMPTY: &str = "Please enter at least Interest, Skills, or Job Title to search.";
    pub const KEYWORD_FAILED: &str = "Error fetching results. Make sure backend is running.";
    pub const AI_EMPTY: &str = "Please enter skills and/or interests for AI search.";
    pub const AI_LOADING: &str = "🤖 AI is analyzing skills & interests...";
    pub const AI_FAILED: &str = "Error connecting to AI engine.";
    pub const AI_HEADING: &str = "🤖 AI Recommended Careers";
    pub const NO_CAREERS: &str = "No careers found.";
    pub const NO_AI_MATCHES: &str = "No AI matches found.";
    pub const SAVED_HEADING: &str = "📝 My Saved Jobs";
    pub const NO_SAVED_JOBS: &str = "No saved jobs.";
    pub const ALREADY_SAVED: &str = "Already saved.";
}

/// 結果エリアの表示内容
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsPanel {
    #[default]
    Blank,
    /// 入力不足・通信失敗などの一行メッセージ
    Message(&'static str),
    Loading,
    Careers {
        heading: Option<&'static str>,
        records: Vec<CareerRecord>,
        empty_text: &'static str,
    },
    Saved(Vec<CareerRecord>),
}

/// 通知の種類
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// ノンブロッキング通知（alertの代わり）
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Error, text: text.into() }
    }
}
