//! Searchable list of hub entries (projects, posts) filtered client-side.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::filter;

/// One card in a searchable list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HubItem {
    pub title: String,
    pub summary: String,
    pub image_url: Option<String>,
}

impl HubItem {
    /// Text matched against the search query.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }
}

/// Search box plus item cards; cards not matching the query are hidden.
#[component]
pub fn SearchList(items: Vec<HubItem>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let items = StoredValue::new(items);

    view! {
        <div class="search-list">
            <input
                id="searchInput"
                class="form-control search-list__input"
                type="search"
                placeholder="Search projects and posts..."
                prop:value=move || ui.get().search_query
                on:input=move |ev| ui.update(|s| s.search_query = event_target_value(&ev))
            />
            <div class="search-list__items">
                {move || {
                    let query = ui.get().search_query;
                    items
                        .with_value(|items| {
                            items
                                .iter()
                                .map(|item| {
                                    let visible = filter::matches_query(&item.search_text(), &query);
                                    let title = item.title.clone();
                                    let summary = item.summary.clone();
                                    let image = item.image_url.clone().map(|src| {
                                        view! { <img class="card-img-top" src=src alt="" loading="lazy"/> }
                                    });
                                    view! {
                                        <div
                                            class="card search-list__item"
                                            style:display=if visible { "block" } else { "none" }
                                        >
                                            {image}
                                            <div class="card-body">
                                                <h3 class="card-title">{title}</h3>
                                                <p class="card-text">{summary}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                }}
            </div>
        </div>
    }
}
