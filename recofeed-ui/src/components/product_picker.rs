//! Product picker
//!
//! Select control plus the send button.

use leptos::*;

use crate::state::{FeedSocket, FeedState, SendDecision};

#[component]
pub fn ProductPicker() -> impl IntoView {
    let state = expect_context::<FeedState>();
    let socket = expect_context::<FeedSocket>();
    let select_ref = create_node_ref::<html::Select>();

    let on_send = move |_| {
        let value = select_ref
            .get()
            .map(|select| select.value())
            .unwrap_or_default();

        match socket.send_selection(&value) {
            Ok(SendDecision::Transmit(_)) => {}
            Ok(SendDecision::Prompt(prompt)) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(prompt);
                }
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Send failed: {}", e).into());
                state.show_error("No hay conexión con el servidor");
            }
        }
    };

    view! {
        <div class="input-group mb-3">
            <select id="productSelect" class="form-select" node_ref=select_ref>
                <option value="">"Seleccionar producto"</option>
                {move || {
                    state.products.get()
                        .into_iter()
                        .map(|product| view! { <option value=product.clone()>{product}</option> })
                        .collect_view()
                }}
            </select>
            <button id="sendButton" class="btn btn-primary" on:click=on_send>
                "Enviar"
            </button>
        </div>
    }
}
