use leptos::*;
use std::rc::Rc;

mod components;
mod config;
mod error;
mod models;
mod services;
mod utils;

use components::{AiSearchForm, DiagnosticsPanel, NoticeToast, ResultsView, SearchForm, Sidebar};
use config::AppConfig;
use models::{InputField, Notice, ResultsPanel};
use services::{delete_notice, save_notice, SavedJobs, SearchService};
use utils::api::HttpCareerApi;
use utils::log_trace::{log_info, log_warn};
use utils::storage::{self, KeyValueStore, LocalStorage};

const DARK_MODE_CLASS: &str = "dark-mode";
const NOTICE_TIMEOUT_MS: u32 = 3000;

// ============================================
// 共有状態
// ============================================

/// 画面全体で共有するシグナルとサービス
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub store: Rc<dyn KeyValueStore>,
    pub search: Rc<SearchService<HttpCareerApi>>,
    pub saved_jobs: Rc<SavedJobs>,
    pub results: RwSignal<ResultsPanel>,
    pub interest: RwSignal<String>,
    pub skills: RwSignal<String>,
    pub job: RwSignal<String>,
    pub hf_query: RwSignal<String>,
    pub notice: RwSignal<Option<Notice>>,
    pub dark_mode: RwSignal<bool>,
}

impl AppContext {
    fn new(config: AppConfig, store: Rc<dyn KeyValueStore>) -> Self {
        let api = HttpCareerApi::new(&config);
        AppContext {
            config: Rc::new(config),
            saved_jobs: Rc::new(SavedJobs::new(store.clone())),
            store,
            search: Rc::new(SearchService::new(api)),
            results: create_rw_signal(ResultsPanel::Blank),
            interest: create_rw_signal(String::new()),
            skills: create_rw_signal(String::new()),
            job: create_rw_signal(String::new()),
            hf_query: create_rw_signal(String::new()),
            notice: create_rw_signal(None),
            dark_mode: create_rw_signal(false),
        }
    }

    pub fn field(&self, field: InputField) -> RwSignal<String> {
        match field {
            InputField::Interest => self.interest,
            InputField::Skills => self.skills,
            InputField::Job => self.job,
            InputField::HfQuery => self.hf_query,
        }
    }

    pub fn run_search(&self) {
        let interest = self.interest.get_untracked();
        let skills = self.skills.get_untracked();
        let job = self.job.get_untracked();
        let search = self.search.clone();
        let results = self.results;
        spawn_local(async move {
            search.search(&interest, &skills, &job, move |panel| results.set(panel)).await;
        });
    }

    pub fn run_hf_search(&self) {
        let query = self.hf_query.get_untracked();
        let search = self.search.clone();
        let results = self.results;
        spawn_local(async move {
            search.hf_search(&query, move |panel| results.set(panel)).await;
        });
    }

    /// 分野を選ぶと興味欄を置き換えて検索
    pub fn select_domain(&self, domain: &str) {
        self.interest.set(domain.to_string());
        self.run_search();
    }

    /// 入力欄をクリアして再検索
    pub fn reset_field(&self, field: InputField) {
        self.field(field).set(String::new());
        self.run_search();
    }

    pub fn save_job(&self, record: models::CareerRecord) {
        let result = self.saved_jobs.save(record);
        if let Err(e) = &result {
            log_warn("saved-jobs", &e.to_string());
        }
        self.notify(save_notice(&result));
    }

    /// 結果エリアを保存済み一覧に切り替える（応答待ちの検索は破棄）
    pub fn show_saved_jobs(&self) {
        self.search.invalidate();
        self.results.set(self.saved_jobs.show_saved_jobs());
    }

    pub fn delete_job(&self, index: usize) {
        let result = self.saved_jobs.delete(index);
        if let Err(e) = &result {
            log_warn("saved-jobs", &e.to_string());
        }
        self.notify(delete_notice(&result));
        self.show_saved_jobs();
    }

    pub fn voice(&self, field: InputField) {
        let target = self.field(field);
        let notice = self.notice;
        let started = utils::voice::start_voice(
            &self.config.voice_locale,
            move |text| target.set(text),
            move |err| notice.set(Some(Notice::error(err.to_string()))),
        );
        if let Err(e) = started {
            self.notify(Notice::error(e.to_string()));
        }
    }

    pub fn toggle_dark_mode(&self) {
        let enabled = !self.dark_mode.get_untracked();
        self.dark_mode.set(enabled);
        apply_dark_mode(enabled);
        if let Err(e) = storage::store_dark_mode(self.store.as_ref(), enabled) {
            log_warn("storage", &e.to_string());
        }
    }

    /// 通知を出し、一定時間後に消す（別の通知に置き換わっていれば触らない）
    pub fn notify(&self, notice: Notice) {
        let signal = self.notice;
        signal.set(Some(notice.clone()));
        spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            if signal.get_untracked().as_ref() == Some(&notice) {
                signal.set(None);
            }
        });
    }
}

/// `<body>` に dark-mode クラスを付け外し
fn apply_dark_mode(enabled: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.class_list().toggle_with_force(DARK_MODE_CLASS, enabled);
    }
}

fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

// ============================================
// メインアプリ
// ============================================

#[component]
fn App() -> impl IntoView {
    let store: Rc<dyn KeyValueStore> = Rc::new(LocalStorage);
    let config = AppConfig::resolve(&location_search());
    log_info("bootstrap", &format!("API: {} / 分野 {}件", config.api_base, config.domains.len()));

    let ctx = AppContext::new(config, store);

    // 保存済みのダークモードを最初の操作より前に反映
    let dark = storage::load_dark_mode(ctx.store.as_ref());
    ctx.dark_mode.set(dark);
    apply_dark_mode(dark);

    provide_context(ctx.clone());
    let dark_mode = ctx.dark_mode;

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"🧭 Career Compass"</h1>
                <button class="dark-toggle" on:click=move |_| ctx.toggle_dark_mode()>
                    {move || if dark_mode.get() { "☀️ Light" } else { "🌙 Dark" }}
                </button>
            </header>

            <div class="layout">
                <Sidebar />
                <main class="container">
                    <SearchForm />
                    <AiSearchForm />
                    <ResultsView />
                </main>
            </div>

            <NoticeToast />
            <DiagnosticsPanel />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
