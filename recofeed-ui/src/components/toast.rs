//! Toast Notification Component
//!
//! Shows transient error notices.

use leptos::*;

use crate::state::FeedState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<FeedState>();

    view! {
        <div class="position-fixed bottom-0 end-0 p-3">
            {move || {
                state.error.get().map(|msg| view! { <ToastMessage message=msg /> })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="toast show align-items-center text-bg-danger border-0" role="alert">
            <div class="toast-body">
                <span class="me-2">"✕"</span>
                {message}
            </div>
        </div>
    }
}
