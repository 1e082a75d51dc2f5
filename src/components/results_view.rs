//! 結果エリア

use leptos::*;

use super::{CareerCard, SavedJobCard};
use crate::models::{messages, CareerRecord, ResultsPanel};
use crate::AppContext;

/// キーワード検索結果
pub fn show(records: Vec<CareerRecord>) -> ResultsPanel {
    ResultsPanel::Careers {
        heading: None,
        records,
        empty_text: messages::NO_CAREERS,
    }
}

/// AI検索結果（見出し付き）
pub fn show_hf(records: Vec<CareerRecord>) -> ResultsPanel {
    ResultsPanel::Careers {
        heading: Some(messages::AI_HEADING),
        records,
        empty_text: messages::NO_AI_MATCHES,
    }
}

#[component]
pub fn ResultsView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let results = ctx.results;

    view! {
        <div id="results">
            {move || match results.get() {
                ResultsPanel::Blank => view! { <></> }.into_view(),
                ResultsPanel::Message(text) => view! { <p>{text}</p> }.into_view(),
                ResultsPanel::Loading => view! { <p class="loading">{messages::AI_LOADING}</p> }.into_view(),
                ResultsPanel::Careers { heading, records, empty_text } => view! {
                    <>
                    {heading.map(|h| view! { <h2>{h}</h2> })}
                    {if records.is_empty() {
                        view! { <p>{empty_text}</p> }.into_view()
                    } else {
                        records.into_iter()
                            .map(|record| view! { <CareerCard record=record /> })
                            .collect_view()
                    }}
                    </>
                }.into_view(),
                ResultsPanel::Saved(records) => view! {
                    <>
                    <h2>{messages::SAVED_HEADING}</h2>
                    {if records.is_empty() {
                        view! { <p>{messages::NO_SAVED_JOBS}</p> }.into_view()
                    } else {
                        records.into_iter()
                            .enumerate()
                            .map(|(index, record)| view! { <SavedJobCard record=record index=index /> })
                            .collect_view()
                    }}
                    </>
                }.into_view(),
            }}
        </div>
    }
}
