//! キャリアカードコンポーネント
//!
//! 表示内容は `CardContent` で先に組み立て、コンポーネントはそれを描くだけにする。
//! 保存ボタンはクロージャでレコードを保持するので、マークアップにデータを埋め込まない。

use leptos::*;

use crate::models::{CareerRecord, SkillLevel};
use crate::AppContext;

pub const NO_OVERVIEW: &str = "No overview available.";
pub const NO_DEMAND: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct SkillRow {
    pub level: SkillLevel,
    pub items: String,
}

/// カード1枚分の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub heading: String,
    pub category: Option<String>,
    pub overview: String,
    /// `None` のときは見出しごと出さない
    pub advantages: Option<Vec<String>>,
    pub disadvantages: Option<Vec<String>>,
    pub demand: String,
    pub skills: Option<Vec<SkillRow>>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

impl CardContent {
    pub fn from_record(record: &CareerRecord) -> Self {
        let skills = record.required_skills.as_ref().map(|skills| {
            SkillLevel::ORDER
                .iter()
                .filter_map(|&level| {
                    skills
                        .level(level)
                        .filter(|list| !list.is_empty())
                        .map(|list| SkillRow { level, items: list.join(", ") })
                })
                .collect()
        });

        CardContent {
            heading: format!("💼 {}", record.name),
            category: non_empty(&record.category),
            overview: non_empty(&record.overview).unwrap_or_else(|| NO_OVERVIEW.to_string()),
            advantages: record
                .advantages
                .as_ref()
                .map(|list| list.iter().map(|a| format!("✔️ {}", a)).collect()),
            disadvantages: record
                .disadvantages
                .as_ref()
                .map(|list| list.iter().map(|d| format!("❌ {}", d)).collect()),
            demand: non_empty(&record.demand).unwrap_or_else(|| NO_DEMAND.to_string()),
            skills,
        }
    }
}

#[component]
fn ListBlock(title: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <>
            <h3>{title}</h3>
            <ul>
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </>
    }
}

/// 検索結果カード
#[component]
pub fn CareerCard(record: CareerRecord) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let content = CardContent::from_record(&record);

    let on_save = move |_| ctx.save_job(record.clone());

    view! {
        <div class="card">
            <h2>{content.heading}</h2>
            {content.category.map(|c| view! { <span class="category-badge">{c}</span> })}
            <p>{content.overview}</p>

            {content.advantages.map(|items| view! { <ListBlock title="Advantages" items=items /> })}
            {content.disadvantages.map(|items| view! { <ListBlock title="Disadvantages" items=items /> })}

            <h3>"Demand"</h3>
            <p>{content.demand}</p>

            {content.skills.map(|rows| view! {
                <>
                    <h3>"Required Skills:"</h3>
                    <ul>
                        {rows.into_iter().map(|row| view! {
                            <li>"🔹 " <b>{row.level.label()} ":"</b> " " {row.items}</li>
                        }).collect_view()}
                    </ul>
                </>
            })}

            <button on:click=on_save>"💾 Save Job"</button>
        </div>
    }
}

/// 保存済みカード（削除ボタン付き）
#[component]
pub fn SavedJobCard(record: CareerRecord, index: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let overview = non_empty(&record.overview).unwrap_or_else(|| NO_OVERVIEW.to_string());

    view! {
        <div class="card">
            <h2>{record.name}</h2>
            <p>{overview}</p>
            <button on:click=move |_| ctx.delete_job(index)>"🗑️ Delete"</button>
        </div>
    }
}
