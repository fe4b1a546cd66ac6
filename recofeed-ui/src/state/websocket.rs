//! WebSocket Client
//!
//! The recommendation channel. One socket per mounted app; it is opened once,
//! never reopened, and closed when the app is torn down.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use super::feed::{decide_send, FeedState, SendDecision};

/// Handlers must outlive the socket callbacks, so the socket owns them
struct Handlers {
    _on_open: Closure<dyn FnMut(JsValue)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
    _on_error: Closure<dyn FnMut(JsValue)>,
}

struct Inner {
    ws: WebSocket,
    _handlers: Handlers,
}

/// Browser side of the recommendation channel
#[derive(Clone)]
pub struct FeedSocket {
    inner: Rc<RefCell<Option<Inner>>>,
    url: String,
}

impl FeedSocket {
    /// Open the channel and wire its events into `state`
    pub fn connect(url: &str, state: FeedState) -> Self {
        let socket = Self {
            inner: Rc::new(RefCell::new(None)),
            url: url.to_string(),
        };

        match WebSocket::new(url) {
            Ok(ws) => {
                let handlers = Self::setup_handlers(&ws, state);
                *socket.inner.borrow_mut() = Some(Inner {
                    ws,
                    _handlers: handlers,
                });
            }
            Err(e) => {
                web_sys::console::error_1(&format!("WebSocket connection failed: {:?}", e).into());
                state.show_error("No se pudo conectar con el servidor");
            }
        }

        socket
    }

    fn setup_handlers(ws: &WebSocket, state: FeedState) -> Handlers {
        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            web_sys::console::log_1(&"Recommendation channel open".into());
            state.connected.set(true);
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        // Binary frames are not part of the protocol
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
                let text: String = text.into();
                state.apply_message(&text);
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            web_sys::console::log_1(
                &format!(
                    "Recommendation channel closed: code={}, reason={}",
                    event.code(),
                    event.reason()
                )
                .into(),
            );
            state.connected.set(false);
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        let on_error = Closure::wrap(Box::new(move |e: JsValue| {
            web_sys::console::error_1(&format!("WebSocket error: {:?}", e).into());
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        Handlers {
            _on_open: on_open,
            _on_message: on_message,
            _on_close: on_close,
            _on_error: on_error,
        }
    }

    /// Send the select control's value, unless it is empty
    pub fn send_selection(&self, value: &str) -> Result<SendDecision, String> {
        let decision = decide_send(value);

        if let SendDecision::Transmit(product) = &decision {
            let inner = self.inner.borrow();
            let inner = inner.as_ref().ok_or("WebSocket not connected")?;
            inner
                .ws
                .send_with_str(product)
                .map_err(|e| format!("{:?}", e))?;
        }

        Ok(decision)
    }

    /// Channel URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Close the channel and drop its handlers
    pub fn close(&self) {
        if let Some(inner) = self.inner.borrow_mut().take() {
            inner.ws.set_onopen(None);
            inner.ws.set_onmessage(None);
            inner.ws.set_onclose(None);
            inner.ws.set_onerror(None);
            let _ = inner.ws.close();
        }
    }
}
