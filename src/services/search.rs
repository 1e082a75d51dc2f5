//! 検索コントローラ
//!
//! キーワード検索とAI検索。どちらも入力チェック → 1回だけリクエスト → 結果表示。
//! 失敗理由はトレースログにだけ残し、画面には固定メッセージを出す。

use crate::components::results_view::{show, show_hf};
use crate::error::CareerError;
use crate::models::{messages, AiQuery, KeywordQuery, ResultsPanel};
use crate::utils::api::CareerApi;
use crate::utils::log_trace::{log_debug, log_error_with_data, log_info_with_data};
use crate::utils::sequence::RequestSequence;

/// 3項目をtrimし、全部空ならエラー
pub fn keyword_query(interest: &str, skills: &str, job: &str) -> Result<KeywordQuery, CareerError> {
    let query = KeywordQuery {
        interest: interest.trim().to_string(),
        skills: skills.trim().to_string(),
        job: job.trim().to_string(),
    };
    if query.interest.is_empty() && query.skills.is_empty() && query.job.is_empty() {
        return Err(CareerError::Validation("interest, skills and job are all empty"));
    }
    Ok(query)
}

pub fn ai_query(query: &str) -> Result<AiQuery, CareerError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CareerError::Validation("AI query is empty"));
    }
    Ok(AiQuery { query: query.to_string() })
}

fn log_failure(category: &str, err: &CareerError) {
    log_error_with_data(
        category,
        &err.to_string(),
        serde_json::json!({ "kind": err.kind() }),
    );
}

pub struct SearchService<A> {
    api: A,
    keyword_seq: RequestSequence,
    ai_seq: RequestSequence,
}

impl<A: CareerApi> SearchService<A> {
    pub fn new(api: A) -> Self {
        SearchService {
            api,
            keyword_seq: RequestSequence::default(),
            ai_seq: RequestSequence::default(),
        }
    }

    /// キーワード検索
    ///
    /// 後続の検索が発行済みなら、このレスポンスは表示しない。
    /// 空入力でも世代は進めるので、応答待ちの古い検索は表示されない。
    pub async fn search<R>(&self, interest: &str, skills: &str, job: &str, render: R)
    where
        R: Fn(ResultsPanel),
    {
        let ticket = self.keyword_seq.begin();
        let query = match keyword_query(interest, skills, job) {
            Ok(q) => q,
            Err(err) => {
                log_failure("search", &err);
                render(ResultsPanel::Message(messages::KEYWORD_EMPTY));
                return;
            }
        };

        log_info_with_data("search", "POST /search", serde_json::json!(query));
        let result = self.api.keyword_search(&query).await;

        if !self.keyword_seq.is_current(ticket) {
            log_debug("search", "古いレスポンスを破棄");
            return;
        }

        match result {
            Ok(records) => {
                log_info_with_data("search", "検索完了", serde_json::json!({ "count": records.len() }));
                render(show(records));
            }
            Err(err) => {
                log_failure("search", &err);
                render(ResultsPanel::Message(messages::KEYWORD_FAILED));
            }
        }
    }

    /// AI検索（自由入力）
    pub async fn hf_search<R>(&self, query: &str, render: R)
    where
        R: Fn(ResultsPanel),
    {
        let ticket = self.ai_seq.begin();
        let query = match ai_query(query) {
            Ok(q) => q,
            Err(err) => {
                log_failure("hf-search", &err);
                render(ResultsPanel::Message(messages::AI_EMPTY));
                return;
            }
        };

        render(ResultsPanel::Loading);
        log_info_with_data("hf-search", "POST /hf-search", serde_json::json!(query));
        let result = self.api.ai_search(&query).await;

        if !self.ai_seq.is_current(ticket) {
            log_debug("hf-search", "古いレスポンスを破棄");
            return;
        }

        match result {
            Ok(records) => {
                log_info_with_data("hf-search", "AI検索完了", serde_json::json!({ "count": records.len() }));
                render(show_hf(records));
            }
            Err(err) => {
                log_failure("hf-search", &err);
                render(ResultsPanel::Message(messages::AI_FAILED));
            }
        }
    }

    /// 結果エリアを別の表示（保存済み一覧など）に切り替えたとき、応答待ちの検索を無効にする
    pub fn invalidate(&self) {
        self.keyword_seq.begin();
        self.ai_seq.begin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CareerRecord;
    use crate::utils::log_trace::{clear_logs, recent_logs, Level};
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    type Reply = Result<Vec<CareerRecord>, CareerError>;

    /// 呼び出し回数を数え、用意した結果を順に返す
    /// `gates` があればそのチャネルの値を待ってから返す
    #[derive(Default)]
    struct FakeApi {
        calls: Cell<usize>,
        last_keyword: RefCell<Option<KeywordQuery>>,
        responses: RefCell<VecDeque<Reply>>,
        gates: RefCell<VecDeque<oneshot::Receiver<Reply>>>,
    }

    impl FakeApi {
        fn returning(result: Reply) -> Self {
            let api = FakeApi::default();
            api.responses.borrow_mut().push_back(result);
            api
        }

        async fn next(&self) -> Reply {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gates.borrow_mut().pop_front();
            if let Some(rx) = gate {
                return rx.await.unwrap_or(Ok(Vec::new()));
            }
            self.responses.borrow_mut().pop_front().unwrap_or(Ok(Vec::new()))
        }
    }

    impl CareerApi for FakeApi {
        async fn keyword_search(&self, query: &KeywordQuery) -> Reply {
            *self.last_keyword.borrow_mut() = Some(query.clone());
            self.next().await
        }

        async fn ai_search(&self, _query: &AiQuery) -> Reply {
            self.next().await
        }
    }

    #[test]
    fn test_keyword_query_trims() {
        let q = keyword_query("  Engineering ", "", "\t").unwrap();
        assert_eq!(q.interest, "Engineering");
        assert_eq!(q.job, "");
        assert!(keyword_query(" ", "  ", "").is_err());
    }

    #[tokio::test]
    async fn test_empty_keyword_search_makes_no_call() {
        let panels = RefCell::new(Vec::new());
        let service = SearchService::new(FakeApi::default());
        for (i, s, j) in [("", "", ""), ("  ", "\t", " \n ")] {
            service.search(i, s, j, |p| panels.borrow_mut().push(p)).await;
        }
        assert_eq!(service.api.calls.get(), 0);
        assert_eq!(
            *panels.borrow(),
            vec![ResultsPanel::Message(messages::KEYWORD_EMPTY); 2]
        );
    }

    #[tokio::test]
    async fn test_empty_ai_search_makes_no_call() {
        let panels = RefCell::new(Vec::new());
        let service = SearchService::new(FakeApi::default());
        service.hf_search("   ", |p| panels.borrow_mut().push(p)).await;
        assert_eq!(service.api.calls.get(), 0);
        assert_eq!(*panels.borrow(), vec![ResultsPanel::Message(messages::AI_EMPTY)]);
    }

    #[tokio::test]
    async fn test_keyword_search_renders_results() {
        let record = CareerRecord::named("Civil Engineer");
        let service = SearchService::new(FakeApi::returning(Ok(vec![record.clone()])));
        let panels = RefCell::new(Vec::new());

        service.search("Engineering", "", "", |p| panels.borrow_mut().push(p)).await;

        assert_eq!(service.api.calls.get(), 1);
        let sent = service.api.last_keyword.borrow().clone().unwrap();
        assert_eq!(sent, KeywordQuery { interest: "Engineering".into(), skills: "".into(), job: "".into() });
        assert_eq!(*panels.borrow(), vec![show(vec![record])]);
    }

    #[tokio::test]
    async fn test_failures_collapse_to_one_message_but_log_kind() {
        clear_logs();
        let service = SearchService::new(FakeApi::returning(Err(CareerError::Http(502))));
        let panels = RefCell::new(Vec::new());
        service.search("x", "", "", |p| panels.borrow_mut().push(p)).await;
        assert_eq!(*panels.borrow(), vec![ResultsPanel::Message(messages::KEYWORD_FAILED)]);

        let errors: Vec<_> = recent_logs().into_iter().filter(|e| e.level == Level::Error).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].data, Some(serde_json::json!({ "kind": "http" })));
    }

    #[tokio::test]
    async fn test_ai_search_shows_loading_then_results() {
        let service = SearchService::new(FakeApi::returning(Ok(Vec::new())));
        let panels = RefCell::new(Vec::new());
        service.hf_search(" python biology ", |p| panels.borrow_mut().push(p)).await;

        let panels = panels.into_inner();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0], ResultsPanel::Loading);
        assert_eq!(
            panels[1],
            ResultsPanel::Careers {
                heading: Some(messages::AI_HEADING),
                records: Vec::new(),
                empty_text: messages::NO_AI_MATCHES,
            }
        );
    }

    #[tokio::test]
    async fn test_ai_search_failure_message() {
        let service = SearchService::new(FakeApi::returning(Err(CareerError::Transport("offline".into()))));
        let panels = RefCell::new(Vec::new());
        service.hf_search("data", |p| panels.borrow_mut().push(p)).await;
        assert_eq!(panels.borrow().last(), Some(&ResultsPanel::Message(messages::AI_FAILED)));
    }

    #[tokio::test]
    async fn test_stale_response_discarded() {
        let (tx_old, rx_old) = oneshot::channel();
        let (tx_new, rx_new) = oneshot::channel();
        let api = FakeApi::default();
        api.gates.borrow_mut().extend([rx_old, rx_new]);
        let service = SearchService::new(api);
        let panels = RefCell::new(Vec::new());

        // 2件とも発行してから、新しい方 → 古い方の順に応答させる
        tokio::join!(
            service.search("first", "", "", |p| panels.borrow_mut().push(p)),
            service.search("second", "", "", |p| panels.borrow_mut().push(p)),
            async move {
                let _ = tx_new.send(Ok(vec![CareerRecord::named("New")]));
                tokio::task::yield_now().await;
                let _ = tx_old.send(Ok(vec![CareerRecord::named("Old")]));
            },
        );

        assert_eq!(service.api.calls.get(), 2);
        assert_eq!(*panels.borrow(), vec![show(vec![CareerRecord::named("New")])]);
    }

    #[tokio::test]
    async fn test_empty_search_supersedes_pending_one() {
        let (tx, rx) = oneshot::channel();
        let api = FakeApi::default();
        api.gates.borrow_mut().push_back(rx);
        let service = SearchService::new(api);
        let panels = RefCell::new(Vec::new());

        tokio::join!(
            service.search("Engineering", "", "", |p| panels.borrow_mut().push(p)),
            async {
                service.search("", "", "", |p| panels.borrow_mut().push(p)).await;
                let _ = tx.send(Ok(vec![CareerRecord::named("Stale")]));
            },
        );

        assert_eq!(service.api.calls.get(), 1);
        assert_eq!(*panels.borrow(), vec![ResultsPanel::Message(messages::KEYWORD_EMPTY)]);
    }

    #[tokio::test]
    async fn test_empty_ai_search_supersedes_pending_one() {
        let (tx, rx) = oneshot::channel();
        let api = FakeApi::default();
        api.gates.borrow_mut().push_back(rx);
        let service = SearchService::new(api);
        let panels = RefCell::new(Vec::new());

        tokio::join!(
            service.hf_search("biology", |p| panels.borrow_mut().push(p)),
            async {
                service.hf_search("  ", |p| panels.borrow_mut().push(p)).await;
                let _ = tx.send(Ok(vec![CareerRecord::named("Stale")]));
            },
        );

        assert_eq!(
            *panels.borrow(),
            vec![ResultsPanel::Loading, ResultsPanel::Message(messages::AI_EMPTY)]
        );
    }

    #[tokio::test]
    async fn test_invalidate_drops_pending_results() {
        let (tx, rx) = oneshot::channel();
        let api = FakeApi::default();
        api.gates.borrow_mut().push_back(rx);
        let service = SearchService::new(api);
        let panels = RefCell::new(Vec::new());

        tokio::join!(
            service.search("Engineering", "", "", |p| panels.borrow_mut().push(p)),
            async {
                service.invalidate();
                let _ = tx.send(Ok(vec![CareerRecord::named("Stale")]));
            },
        );

        assert_eq!(service.api.calls.get(), 1);
        assert!(panels.borrow().is_empty());
    }
}
