//! Backend Command Wrappers
//!
//! Transport selection plus fire-and-forget bindings to the todo API.

mod todo;

use todo_protocol::{MemoryBackend, ProtocolError, TodoClient, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config::{BackendKind, WidgetConfig};

// Re-export all public items
pub use todo::*;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Client type shared by the whole widget
pub type Client = TodoClient<WidgetTransport>;

/// Build the page's client from configuration
pub fn connect(config: &WidgetConfig) -> Client {
    let transport = match config.backend {
        BackendKind::Http => WidgetTransport::Http(FetchTransport::new(&config.api_endpoint)),
        BackendKind::Memory => WidgetTransport::Memory(MemoryBackend::new()),
    };
    TodoClient::new(transport)
}

#[derive(Debug, Clone)]
pub enum WidgetTransport {
    Http(FetchTransport),
    Memory(MemoryBackend),
}

impl Transport for WidgetTransport {
    async fn post_form(&self, body: String) -> Result<String, ProtocolError> {
        match self {
            WidgetTransport::Http(fetch) => fetch.post_form(body).await,
            WidgetTransport::Memory(memory) => memory.post_form(body).await,
        }
    }
}

/// POSTs form bodies to the API endpoint with `window.fetch`
#[derive(Debug, Clone)]
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl Transport for FetchTransport {
    async fn post_form(&self, body: String) -> Result<String, ProtocolError> {
        let window = web_sys::window().ok_or_else(|| ProtocolError::Transport("no window".to_string()))?;

        let headers = Headers::new().map_err(js_error)?;
        headers.set("Content-Type", FORM_CONTENT_TYPE).map_err(js_error)?;
        headers.set("Accept", "application/json").map_err(js_error)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.endpoint, &init).map_err(js_error)?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        if !response.ok() {
            return Err(ProtocolError::Status(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(js_error)?).await.map_err(js_error)?;
        text.as_string()
            .ok_or_else(|| ProtocolError::Transport("response body is not text".to_string()))
    }
}

/// Flatten a JS exception into a transport error
fn js_error(value: JsValue) -> ProtocolError {
    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    };
    ProtocolError::Transport(message)
}
