//! 検索フォーム（キーワード / AI）

use leptos::*;

use crate::models::InputField;
use crate::AppContext;

#[component]
fn FieldInput(field: InputField, placeholder: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let value = ctx.field(field);
    let ctx_voice = ctx.clone();

    view! {
        <div class="input-group">
            <input type="text" id=field.id() placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev)) />
            <button class="voice-btn" title="Voice input" on:click=move |_| ctx_voice.voice(field)>"🎤"</button>
            <button class="reset-btn" title="Clear" on:click=move |_| ctx.reset_field(field)>"✖"</button>
        </div>
    }
}

/// キーワード検索フォーム
#[component]
pub fn SearchForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    view! {
        <section class="search-form">
            <FieldInput field=InputField::Interest placeholder="Interest (e.g. Engineering)" />
            <FieldInput field=InputField::Skills placeholder="Skills (e.g. python, drawing)" />
            <FieldInput field=InputField::Job placeholder="Job title" />
            <button class="search-btn" on:click=move |_| ctx.run_search()>"🔍 Search"</button>
        </section>
    }
}

/// AI検索フォーム
#[component]
pub fn AiSearchForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let query = ctx.field(InputField::HfQuery);
    let ctx_voice = ctx.clone();

    view! {
        <section class="ai-search-form">
            <h3>"🤖 AI Career Match"</h3>
            <textarea id=InputField::HfQuery.id()
                placeholder="Describe your skills and interests..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))></textarea>
            <div class="ai-actions">
                <button class="voice-btn" on:click=move |_| ctx_voice.voice(InputField::HfQuery)>"🎤"</button>
                <button class="search-btn" on:click=move |_| ctx.run_hf_search()>"✨ AI Search"</button>
            </div>
        </section>
    }
}
