//! In-Memory Backend
//!
//! Answers API calls in-process with the same ids, ordering and error
//! bodies as the server. Used by tests and by the widget when no server is
//! configured.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ProtocolError;
use crate::item::{NewTodoItem, TodoId, TodoItem};
use crate::request::ApiRequest;
use crate::transport::Transport;

/// Body returned for a missing or unrecognised `method`.
///
/// Kept byte-for-byte; note it is not valid JSON.
pub const INVALID_METHOD_RESPONSE: &str = "{'error': 'Invalid method'}";

#[derive(Debug, Default)]
struct MemoryState {
    /// Insertion order is listing order
    items: Vec<TodoItem>,
    requests: Vec<String>,
    offline: bool,
}

/// Shared handle; clones see the same items.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request body received so far, oldest first
    pub fn requests(&self) -> Vec<String> {
        self.state.borrow().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.state.borrow_mut().requests.clear();
    }

    /// While offline every call fails with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.state.borrow_mut().offline = offline;
    }

    pub fn items(&self) -> Vec<TodoItem> {
        self.state.borrow().items.clone()
    }

    /// Handle one form body and produce the response text.
    ///
    /// Failures the server would answer with an HTTP 500 come back as
    /// `ProtocolError::Status(500)`.
    pub fn handle(&self, body: &str) -> Result<String, ProtocolError> {
        let request = match ApiRequest::from_form(body) {
            Ok(request) => request,
            Err(ProtocolError::UnknownMethod(method)) => {
                log::warn!("[MEMORY] invalid method {:?}", method);
                return Ok(INVALID_METHOD_RESPONSE.to_string());
            }
            Err(e) => {
                log::warn!("[MEMORY] rejected request: {}", e);
                return Err(ProtocolError::Status(500));
            }
        };

        let mut state = self.state.borrow_mut();
        let response = match request {
            ApiRequest::CreateTodoItem(item) => {
                let created = state.create(item);
                serde_json::to_string(&created)?
            }
            ApiRequest::GetTodoItems => serde_json::to_string(&state.items)?,
            ApiRequest::UpdateTodoItem { id, complete } => match state.update(&id, complete) {
                Some(updated) => serde_json::to_string(&updated)?,
                None => {
                    log::warn!("[MEMORY] no todo item with id {}", id);
                    return Err(ProtocolError::Status(500));
                }
            },
        };
        Ok(response)
    }
}

impl MemoryState {
    fn create(&mut self, item: NewTodoItem) -> TodoItem {
        // Ids are the store size at insertion time
        let created = TodoItem {
            id: TodoId::new(self.items.len().to_string()),
            name: item.name,
            category: item.category,
            complete: item.complete,
        };
        self.items.push(created.clone());
        created
    }

    fn update(&mut self, id: &TodoId, complete: bool) -> Option<TodoItem> {
        let item = self.items.iter_mut().find(|item| &item.id == id)?;
        item.complete = complete;
        Some(item.clone())
    }
}

impl Transport for MemoryBackend {
    async fn post_form(&self, body: String) -> Result<String, ProtocolError> {
        let offline = {
            let mut state = self.state.borrow_mut();
            state.requests.push(body.clone());
            state.offline
        };
        if offline {
            return Err(ProtocolError::Transport("memory backend is offline".to_string()));
        }
        self.handle(&body)
    }
}
