//! 通知トーストと診断ログ表示

use leptos::*;

use crate::models::NoticeKind;
use crate::utils::log_trace::{clear_logs, recent_logs, LogEntry};
use crate::AppContext;

const VISIBLE_LOG_ENTRIES: usize = 20;

#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let notice = ctx.notice;

    view! {
        {move || notice.get().map(|n| {
            let class = match n.kind {
                NoticeKind::Success => "toast success",
                NoticeKind::Info => "toast info",
                NoticeKind::Error => "toast error",
            };
            view! {
                <div class=class role="status" on:click=move |_| notice.set(None)>{n.text}</div>
            }
        })}
    }
}

/// 直近のトレースログ（開いた時点のスナップショット）
#[component]
pub fn DiagnosticsPanel() -> impl IntoView {
    let (entries, set_entries) = create_signal(Vec::<LogEntry>::new());
    let (open, set_open) = create_signal(false);

    let refresh = move || {
        let logs = recent_logs();
        let skip = logs.len().saturating_sub(VISIBLE_LOG_ENTRIES);
        set_entries.set(logs.into_iter().skip(skip).collect());
    };

    view! {
        <footer class="diagnostics">
            <button on:click=move |_| {
                if !open.get() { refresh(); }
                set_open.update(|o| *o = !*o);
            }>"🩺 Logs"</button>
            {move || open.get().then(|| view! {
                <div class="log-list">
                    <button on:click=move |_| { clear_logs(); refresh(); }>"Clear"</button>
                    <ul>
                        {entries.get().into_iter().rev().map(|e| {
                            let class = format!("log-{:?}", e.level).to_lowercase();
                            view! {
                                <li class=class>
                                    <span class="log-time">{e.timestamp}</span>
                                    " [" {e.category} "] "
                                    {e.message}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            })}
        </footer>
    }
}
