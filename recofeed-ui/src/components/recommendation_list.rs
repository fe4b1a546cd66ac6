//! Recommendation list
//!
//! Shows the entries from the most recent well-formed reply.

use leptos::*;

use crate::state::FeedState;

#[component]
pub fn RecommendationList() -> impl IntoView {
    let state = expect_context::<FeedState>();

    view! {
        <ul id="recommendationList" class="list-group">
            {move || {
                state.entries.get()
                    .into_iter()
                    .map(|entry| view! { <li class=entry.css_class()>{entry.text}</li> })
                    .collect_view()
            }}
        </ul>
    }
}
