//! App Root Component

use leptos::*;

use crate::api;
use crate::components::{ProductPicker, RecommendationList, Toast};
use crate::state::{provide_feed_state, FeedSocket, FeedState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_feed_state();

    // The channel lives exactly as long as the app
    let socket = FeedSocket::connect(&api::ws_url(&api::get_api_base()), state);
    provide_context(socket.clone());
    on_cleanup(move || socket.close());

    spawn_local(async move {
        match api::fetch_products().await {
            Ok(products) => state.products.set(products),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load products: {}", e).into());
                state.show_error("No se pudieron cargar los productos");
            }
        }
    });

    view! {
        <div class="container py-4">
            <h1 class="mb-4">"Recomendaciones"</h1>
            <ProductPicker />
            <RecommendationList />
            <Footer />
            <Toast />
        </div>
    }
}

/// Footer component showing connection status
#[component]
fn Footer() -> impl IntoView {
    let state = expect_context::<FeedState>();
    let socket = expect_context::<FeedSocket>();
    let url = socket.url().to_string();

    view! {
        <footer class="d-flex justify-content-between text-muted small mt-4">
            <span title=url>
                {move || {
                    if state.connected.get() {
                        view! { <span class="text-success">"● Conectado"</span> }.into_view()
                    } else {
                        view! { <span class="text-danger">"● Desconectado"</span> }.into_view()
                    }
                }}
            </span>
            <span>
                {move || {
                    state.last_update.get()
                        .and_then(chrono::DateTime::from_timestamp_millis)
                        .map(|dt| format!("Última actualización: {}", dt.format("%H:%M:%S")))
                        .unwrap_or_else(|| "Sin datos".to_string())
                }}
            </span>
        </footer>
    }
}
