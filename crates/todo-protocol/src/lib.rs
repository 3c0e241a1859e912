//! Todo Protocol
//!
//! Wire format and client for the todo backend API.
//!
//! Every call is a form-encoded POST to a single endpoint, disambiguated by a
//! `method` field, answered with JSON:
//! - `createTodoItem` -> the created item
//! - `getTodoItems` -> every stored item, in backend order
//! - `updateTodoItem` -> ignored by the client
//!
//! The crate has no browser dependencies. The UI supplies a [`Transport`]
//! backed by `fetch`; tests and offline demos use [`MemoryBackend`].

mod client;
mod error;
mod item;
mod memory;
mod request;
mod transport;

pub use client::TodoClient;
pub use error::ProtocolError;
pub use item::{decode_item, decode_items, NewTodoItem, TodoId, TodoItem};
pub use memory::{MemoryBackend, INVALID_METHOD_RESPONSE};
pub use request::{fields, ApiMethod, ApiRequest};
pub use transport::Transport;
