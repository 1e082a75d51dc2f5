//! サイドバー（分野一覧）

use leptos::*;

use crate::AppContext;

/// 分野をクリックすると興味欄にその文字列を入れて即検索
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let domains = ctx.config.domains.clone();
    let ctx_saved = ctx.clone();

    view! {
        <aside class="sidebar">
            <h3>"Domains"</h3>
            <ul>
                {domains.into_iter().map(|domain| {
                    let ctx = ctx.clone();
                    let label = domain.clone();
                    view! {
                        <li on:click=move |_| ctx.select_domain(&domain)>{label}</li>
                    }
                }).collect_view()}
            </ul>
            <button class="saved-jobs-btn" on:click=move |_| ctx_saved.show_saved_jobs()>
                "📝 My Saved Jobs"
            </button>
        </aside>
    }
}
