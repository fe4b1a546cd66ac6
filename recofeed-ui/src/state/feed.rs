//! Feed State
//!
//! Reactive state for the recommendation feed plus the pure rules that
//! turn a server frame into list entries.

use gloo_timers::callback::Timeout;
use leptos::*;

/// How long an error notice stays up
const ERROR_NOTICE_MS: u32 = 5000;

/// Text of the single entry shown when the server finds nothing
pub const NO_RECOMMENDATIONS: &str = "No se encontraron recomendaciones";

/// Prompt shown when the user sends without choosing a product
pub const CHOOSE_PRODUCT_PROMPT: &str = "Seleccionar un producto primero";

/// One rendered line of the recommendation list
#[derive(Clone, Debug, PartialEq)]
pub struct ListEntry {
    pub text: String,
    pub is_error: bool,
}

impl ListEntry {
    /// Bootstrap classes for the `<li>`
    pub fn css_class(&self) -> &'static str {
        if self.is_error {
            "list-group-item text-danger"
        } else {
            "list-group-item"
        }
    }
}

/// Outcome of pressing the send button
#[derive(Clone, Debug, PartialEq)]
pub enum SendDecision {
    /// Transmit this exact string
    Transmit(String),
    /// Block with this prompt; nothing is sent
    Prompt(&'static str),
}

/// Parse a server frame as a JSON array of strings
pub fn parse_payload(text: &str) -> Result<Vec<String>, String> {
    serde_json::from_str::<Vec<String>>(text).map_err(|e| e.to_string())
}

/// Entries for a freshly received list
///
/// Always replaces the previous contents; an empty list becomes one error entry.
pub fn render_entries(labels: &[String]) -> Vec<ListEntry> {
    if labels.is_empty() {
        return vec![ListEntry {
            text: NO_RECOMMENDATIONS.to_string(),
            is_error: true,
        }];
    }

    labels
        .iter()
        .map(|label| ListEntry {
            text: label.clone(),
            is_error: false,
        })
        .collect()
}

/// Decide what a click on send does with the current select value
pub fn decide_send(value: &str) -> SendDecision {
    if value.is_empty() {
        SendDecision::Prompt(CHOOSE_PRODUCT_PROMPT)
    } else {
        SendDecision::Transmit(value.to_string())
    }
}

/// Feed state provided to all components
#[derive(Clone, Copy)]
pub struct FeedState {
    /// Products offered in the selection control
    pub products: RwSignal<Vec<String>>,
    /// The rendered recommendation list (last well-formed message)
    pub entries: RwSignal<Vec<ListEntry>>,
    /// Channel status
    pub connected: RwSignal<bool>,
    /// When the list last changed
    pub last_update: RwSignal<Option<i64>>,
    /// Transient error notice
    pub error: RwSignal<Option<String>>,
    /// Pending clear of `error`; replacing it cancels the old one
    error_timer: StoredValue<Option<Timeout>>,
}

/// Provide feed state to the component tree
pub fn provide_feed_state() -> FeedState {
    let state = FeedState {
        products: create_rw_signal(Vec::new()),
        entries: create_rw_signal(Vec::new()),
        connected: create_rw_signal(false),
        last_update: create_rw_signal(None),
        error: create_rw_signal(None),
        error_timer: store_value(None),
    };

    provide_context(state);
    state
}

impl FeedState {
    /// Handle one text frame from the channel
    ///
    /// A malformed frame is logged and surfaced as a notice; the list keeps
    /// whatever it showed before.
    pub fn apply_message(&self, text: &str) {
        match parse_payload(text) {
            Ok(labels) => {
                self.entries.set(render_entries(&labels));
                self.last_update
                    .set(Some(chrono::Utc::now().timestamp_millis()));
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Ignoring malformed recommendation payload: {}", e).into(),
                );
                self.show_error("Respuesta del servidor no válida");
            }
        }
    }

    /// Show an error message (auto-clears after timeout)
    ///
    /// A newer notice restarts the countdown.
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        let timer = Timeout::new(ERROR_NOTICE_MS, move || {
            error_signal.set(None);
        });
        self.error_timer.set_value(Some(timer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(entries: &[ListEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_render_non_empty_list() {
        let labels = parse_payload(r#"["Milk","Bread"]"#).unwrap();
        let entries = render_entries(&labels);

        assert_eq!(texts(&entries), vec!["Milk", "Bread"]);
        assert!(entries.iter().all(|e| !e.is_error));
        assert_eq!(entries[0].css_class(), "list-group-item");
    }

    #[test]
    fn test_render_empty_list() {
        let entries = render_entries(&parse_payload("[]").unwrap());

        assert_eq!(texts(&entries), vec![NO_RECOMMENDATIONS]);
        assert!(entries[0].is_error);
        assert_eq!(entries[0].css_class(), "list-group-item text-danger");
    }

    #[test]
    fn test_render_keeps_order_and_count() {
        let labels: Vec<String> = (1..=7).map(|i| format!("P{}", i)).collect();
        let entries = render_entries(&labels);

        assert_eq!(entries.len(), 7);
        assert_eq!(entries[6].text, "P7");
    }

    #[test]
    fn test_malformed_payloads() {
        assert!(parse_payload("not json").is_err());
        assert!(parse_payload(r#"{"recommendations": []}"#).is_err());
        assert!(parse_payload("[1, 2]").is_err());
    }

    #[test]
    fn test_shared_texts() {
        // Same literals as the native client
        assert_eq!(NO_RECOMMENDATIONS, "No se encontraron recomendaciones");
        assert_eq!(CHOOSE_PRODUCT_PROMPT, "Seleccionar un producto primero");
    }

    #[test]
    fn test_decide_send() {
        assert_eq!(
            decide_send("Product A"),
            SendDecision::Transmit("Product A".to_string())
        );
        assert_eq!(decide_send(""), SendDecision::Prompt(CHOOSE_PRODUCT_PROMPT));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn texts(state: &FeedState) -> Vec<String> {
        state.entries.get().into_iter().map(|e| e.text).collect()
    }

    #[wasm_bindgen_test]
    fn test_apply_message_sequence() {
        let runtime = create_runtime();
        let state = provide_feed_state();

        state.apply_message(r#"["A","B"]"#);
        assert_eq!(texts(&state), vec!["A", "B"]);
        assert!(state.entries.get().iter().all(|e| !e.is_error));
        assert!(state.last_update.get().is_some());

        // Malformed frame: notice shown, list untouched
        state.apply_message("garbage");
        assert_eq!(texts(&state), vec!["A", "B"]);
        assert!(state.error.get().is_some());

        state.apply_message("[]");
        assert_eq!(texts(&state), vec![NO_RECOMMENDATIONS]);
        assert!(state.entries.get()[0].is_error);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn test_newer_notice_outlives_older_timer() {
        let runtime = create_runtime();
        let state = provide_feed_state();

        state.show_error("first");
        TimeoutFuture::new(ERROR_NOTICE_MS * 3 / 5).await;
        state.show_error("second");

        // Past the first notice's deadline, short of the second's
        TimeoutFuture::new(ERROR_NOTICE_MS * 3 / 5).await;
        assert_eq!(state.error.get(), Some("second".to_string()));

        TimeoutFuture::new(ERROR_NOTICE_MS / 2).await;
        assert_eq!(state.error.get(), None);

        runtime.dispose();
    }
}
