use blogview_types::SortOrder;
use leptos::prelude::*;

use crate::components::Select;

/// Search input and sort selector; every keystroke re-derives the list.
#[component]
pub(crate) fn Toolbar(
    search_date: RwSignal<String>,
    sort_order: RwSignal<SortOrder>,
) -> impl IntoView {
    let sort_options = Signal::derive(|| {
        vec![
            ("asc".to_string(), "Sort by Date (Earliest)".to_string()),
            ("desc".to_string(), "Sort by Date (Latest)".to_string()),
        ]
    });

    view! {
        <div class="search-sort-section">
            <div class="search-box">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by Date (YYYY-MM-DD)"
                    prop:value=move || search_date.get()
                    on:input=move |ev| search_date.set(event_target_value(&ev))
                />
            </div>

            <Select
                options=sort_options
                value=Signal::derive(move || sort_order.get().as_str().to_string())
                on_change=Callback::new(move |value: String| {
                    sort_order.set(SortOrder::from_value(&value));
                })
            />
        </div>
    }
}
