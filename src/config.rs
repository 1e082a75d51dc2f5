//! アプリ設定
//!
//! 起動時に `AppConfig` を組み立てて各コンポーネントへ渡す。
//! APIのベースURLは `?api=xxx` で上書きできる。上書きはそのページ読み込みの間だけ有効で、保存しない。

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_VOICE_LOCALE: &str = "en-US";

pub const DEFAULT_DOMAINS: [&str; 12] = [
    "Agriculture & Environmental Careers",
    "Business & Management",
    "Design & Creative Arts",
    "Education & Teaching",
    "Engineering",
    "Finance & Accounting",
    "Government & Public Services",
    "Healthcare & Medical",
    "Information Technology",
    "Media, Communication & Journalism",
    "Science & Research",
    "Skilled Trades & Vocational Careers",
];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub domains: Vec<String>,
    pub voice_locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base: DEFAULT_API_BASE.to_string(),
            domains: DEFAULT_DOMAINS.iter().map(|d| d.to_string()).collect(),
            voice_locale: DEFAULT_VOICE_LOCALE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn search_url(&self) -> String {
        format!("{}/search", self.api_base)
    }

    pub fn hf_search_url(&self) -> String {
        format!("{}/hf-search", self.api_base)
    }

    /// URLパラメータがあればそれを、なければ既定値を使う
    ///
    /// `search` は `location.search()` の値（先頭の `?` を含む）。
    pub fn resolve(search: &str) -> Self {
        let mut config = AppConfig::default();
        if let Some(url) = api_base_from_query(search) {
            config.api_base = url;
        }
        config
    }
}

/// `?api=...` を取り出す（末尾の `/` は除去）
fn api_base_from_query(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("api="))
        .map(decode_component)
        .map(|url| url.trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn decode_component(s: &str) -> String {
    js_sys::decode_uri_component(s)
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| s.to_string())
}

// ネイティブ（テスト）では %3A と %2F だけ戻せば足りる
#[cfg(not(target_arch = "wasm32"))]
fn decode_component(s: &str) -> String {
    s.replace("%3A", ":").replace("%3a", ":").replace("%2F", "/").replace("%2f", "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.domains.len(), 12);
        assert_eq!(config.domains[4], "Engineering");
        assert_eq!(config.search_url(), "http://127.0.0.1:5000/search");
        assert_eq!(config.hf_search_url(), "http://127.0.0.1:5000/hf-search");
        assert_eq!(config.voice_locale, "en-US");
    }

    #[test]
    fn test_query_override_applies_to_current_load_only() {
        let config = AppConfig::resolve("?api=https%3A%2F%2Fcareers.example.org%2F");
        assert_eq!(config.api_base, "https://careers.example.org");
        assert_eq!(config.search_url(), "https://careers.example.org/search");

        let next_load = AppConfig::resolve("");
        assert_eq!(next_load.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_other_params_ignored() {
        let config = AppConfig::resolve("?lang=ja&x=1");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }
}
