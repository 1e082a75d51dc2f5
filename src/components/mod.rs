//! UIコンポーネントモジュール

pub mod career_card;
pub mod notice;
pub mod results_view;
pub mod search_form;
pub mod sidebar;

pub use career_card::{CareerCard, SavedJobCard};
pub use notice::{DiagnosticsPanel, NoticeToast};
pub use results_view::ResultsView;
pub use search_form::{AiSearchForm, SearchForm};
pub use sidebar::Sidebar;
