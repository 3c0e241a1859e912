//! Todo Commands
//!
//! Fire-and-forget wrappers: each spawns the request and returns at once.
//! Successful responses reach the table through the store; failures are
//! logged and otherwise dropped, leaving the view as it was.

use leptos::task::spawn_local;
use todo_protocol::NewTodoItem;

use super::Client;
use crate::models::PendingMarker;
use crate::store::{store_render_row, TodoStore};

/// Create an item and render the backend's copy once it answers
pub fn create_todo_item(client: Client, store: TodoStore, item: NewTodoItem) {
    spawn_local(async move {
        match client.create_todo_item(item).await {
            Ok(created) => {
                log::debug!("[API] created item {}", created.id);
                store_render_row(&store, created);
            }
            Err(e) => log::error!("[API] createTodoItem failed: {}", e),
        }
    });
}

/// Fetch every item and render each as its own row, in backend order
pub fn get_todo_items(client: Client, store: TodoStore) {
    spawn_local(async move {
        match client.get_todo_items().await {
            Ok(items) => {
                log::info!("[API] loaded {} items", items.len());
                for item in items {
                    store_render_row(&store, item);
                }
            }
            Err(e) => log::error!("[API] getTodoItems failed: {}", e),
        }
    });
}

/// Send one marker's final state. The response has no effect on the view.
pub fn update_todo_item(client: Client, marker: PendingMarker) {
    spawn_local(async move {
        let id = marker.id.clone();
        if let Err(e) = client.update_todo_item(marker.id, marker.complete).await {
            log::error!("[API] updateTodoItem {} failed: {}", id, e);
        }
    });
}
