//! 検索バックエンド連携

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::AppConfig;
use crate::error::CareerError;
use crate::models::{AiQuery, CareerRecord, KeywordQuery};
use crate::utils::log_trace::log_warn;

/// 検索バックエンド
///
/// 1回の呼び出しにつき1リクエスト。リトライ・タイムアウトなし。
#[allow(async_fn_in_trait)]
pub trait CareerApi {
    async fn keyword_search(&self, query: &KeywordQuery) -> Result<Vec<CareerRecord>, CareerError>;
    async fn ai_search(&self, query: &AiQuery) -> Result<Vec<CareerRecord>, CareerError>;
}

/// fetch を使う実装
#[derive(Debug, Clone)]
pub struct HttpCareerApi {
    search_url: String,
    hf_search_url: String,
}

impl HttpCareerApi {
    pub fn new(config: &AppConfig) -> Self {
        HttpCareerApi {
            search_url: config.search_url(),
            hf_search_url: config.hf_search_url(),
        }
    }
}

impl CareerApi for HttpCareerApi {
    async fn keyword_search(&self, query: &KeywordQuery) -> Result<Vec<CareerRecord>, CareerError> {
        let items = post_json(&self.search_url, query).await?;
        Ok(collect_careers(items))
    }

    async fn ai_search(&self, query: &AiQuery) -> Result<Vec<CareerRecord>, CareerError> {
        let items = post_json(&self.hf_search_url, query).await?;
        Ok(collect_careers(items))
    }
}

/// JSONをPOSTし、レスポンスを配列として受け取る（`null` は `None`）
async fn post_json<T: Serialize>(url: &str, payload: &T) -> Result<Option<Vec<serde_json::Value>>, CareerError> {
    let body = serde_json::to_string(payload)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| CareerError::Transport(format!("Request作成失敗: {:?}", e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| CareerError::Transport(format!("ヘッダー設定失敗: {:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| CareerError::Transport("windowがありません".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| CareerError::Transport(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| CareerError::Transport("Responseへの変換失敗".to_string()))?;

    if !resp.ok() {
        return Err(CareerError::Http(resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(|e| CareerError::Decode(format!("json()失敗: {:?}", e)))?)
        .await
        .map_err(|e| CareerError::Decode(format!("JSON取得失敗: {:?}", e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| CareerError::Decode(e.to_string()))
}

/// レスポンスの各要素をキャリアレコードに変換
///
/// `null` は空リスト扱い。`name` のない要素は捨てて警告ログを残す。
pub fn collect_careers(items: Option<Vec<serde_json::Value>>) -> Vec<CareerRecord> {
    let items = items.unwrap_or_default();
    let total = items.len();

    let records: Vec<CareerRecord> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    if records.len() < total {
        log_warn(
            "api",
            &format!("{}件中{}件のレコードを破棄 (nameなし/形式不正)", total, total - records.len()),
        );
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Vec<CareerRecord> {
        collect_careers(serde_json::from_str(body).unwrap())
    }

    #[test]
    fn test_parse_full_record() {
        let body = r#"[{"name":"Civil Engineer","overview":"Builds things","advantages":["stable"],
            "disadvantages":[],"demand":"High","required_skills":{"basic":["math"]}}]"#;
        let records = parse(body);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Civil Engineer");
        assert_eq!(records[0].advantages.as_deref(), Some(&["stable".to_string()][..]));
        assert_eq!(records[0].disadvantages.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_null_body_is_empty() {
        assert!(parse("null").is_empty());
        assert!(parse("[]").is_empty());
    }

    #[test]
    fn test_records_without_name_dropped() {
        let records = parse(r#"[{"overview":"orphan"},{"name":"Teacher"},{"name":42}]"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Teacher");
    }
}
