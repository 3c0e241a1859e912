//! Widget State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Rows, pending
//! markers and the update button each live in their own field.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_protocol::{TodoId, TodoItem};

use crate::models::{PendingMarker, Row, UpdateControl};

#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Table rows in append order
    pub rows: Vec<Row>,
    /// At most one marker per item id
    pub pending: Vec<PendingMarker>,
    pub update_control: UpdateControl,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Pure State Transitions
// ========================

/// Append a row for `item`. Never deduplicates.
pub fn append_row(rows: &mut Vec<Row>, item: TodoItem) -> usize {
    let key = rows.len();
    rows.push(Row { key, item });
    key
}

/// Record the latest completion state for `id`, replacing any earlier marker
pub fn record_pending(pending: &mut Vec<PendingMarker>, id: TodoId, complete: bool) {
    pending.retain(|marker| marker.id != id);
    pending.push(PendingMarker { id, complete });
}

/// Remove and return every marker
pub fn drain_pending(pending: &mut Vec<PendingMarker>) -> Vec<PendingMarker> {
    std::mem::take(pending)
}

// ========================
// Store Helper Functions
// ========================

/// Render one item as a new table row
pub fn store_render_row(store: &TodoStore, item: TodoItem) {
    append_row(&mut store.rows().write(), item);
}

/// Record a checkbox toggle
pub fn store_record_pending(store: &TodoStore, id: TodoId, complete: bool) {
    record_pending(&mut store.pending().write(), id, complete);
}

/// Disable the update button and hand back every pending marker
pub fn store_begin_update(store: &TodoStore) -> Vec<PendingMarker> {
    *store.update_control().write() = UpdateControl::Submitting;
    drain_pending(&mut store.pending().write())
}

/// Re-enable the update button
pub fn store_finish_update(store: &TodoStore) {
    *store.update_control().write() = UpdateControl::Idle;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RowClass, UPDATE_LABEL};
    use todo_protocol::{decode_items, ApiRequest, MemoryBackend, NewTodoItem, TodoClient};

    fn item(id: &str, name: &str, complete: bool) -> TodoItem {
        TodoItem {
            id: TodoId::new(id),
            name: name.to_string(),
            category: "Errands".to_string(),
            complete,
        }
    }

    #[test]
    fn test_created_item_becomes_incomplete_row() {
        let mut rows = Vec::new();
        let created = todo_protocol::decode_item(
            r#"{"id":7,"name":"Buy milk","category":"Errands","complete":false}"#,
        )
        .unwrap();

        append_row(&mut rows, created);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item.name, "Buy milk");
        assert_eq!(rows[0].item.category, "Errands");
        assert_eq!(RowClass::for_complete(rows[0].item.complete).as_str(), "warning");
    }

    #[test]
    fn test_list_response_rendered_in_order() {
        let mut rows = Vec::new();
        let listed = decode_items(
            r#"[{"id":1,"name":"a","category":"x","complete":true},
                {"id":2,"name":"b","category":"x","complete":false}]"#,
        )
        .unwrap();

        for item in listed {
            append_row(&mut rows, item);
        }

        let ids: Vec<&str> = rows.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        let classes: Vec<&str> = rows.iter().map(|r| RowClass::for_complete(r.item.complete).as_str()).collect();
        assert_eq!(classes, vec!["active", "warning"]);
    }

    #[test]
    fn test_rendering_same_id_twice_appends_twice() {
        let mut rows = Vec::new();
        let first = append_row(&mut rows, item("1", "a", false));
        let second = append_row(&mut rows, item("1", "a", false));

        assert_eq!(rows.len(), 2);
        assert_ne!(first, second);
    }

    #[test]
    fn test_toggle_twice_leaves_one_marker_with_final_state() {
        let mut pending = Vec::new();

        record_pending(&mut pending, TodoId::new("5"), true);
        record_pending(&mut pending, TodoId::new("5"), false);

        assert_eq!(pending, vec![PendingMarker { id: TodoId::new("5"), complete: false }]);
    }

    #[test]
    fn test_retoggled_marker_moves_to_end() {
        let mut pending = Vec::new();

        record_pending(&mut pending, TodoId::new("1"), true);
        record_pending(&mut pending, TodoId::new("2"), true);
        record_pending(&mut pending, TodoId::new("1"), false);

        let ids: Vec<&str> = pending.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_drain_takes_all_markers() {
        let mut pending = Vec::new();
        for id in ["1", "2", "3"] {
            record_pending(&mut pending, TodoId::new(id), true);
        }

        let drained = drain_pending(&mut pending);

        assert_eq!(drained.len(), 3);
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn test_update_sends_one_request_per_marker_and_reenables() {
        let store: TodoStore = Store::new(TodoState::default());
        store_record_pending(&store, TodoId::new("0"), true);
        store_record_pending(&store, TodoId::new("1"), true);
        store_record_pending(&store, TodoId::new("0"), false);

        let markers = store_begin_update(&store);

        assert_eq!(store.update_control().get_untracked(), UpdateControl::Submitting);
        assert!(store.update_control().get_untracked().is_disabled());
        assert!(store.pending().get_untracked().is_empty());
        assert_eq!(markers.len(), 2);

        let client = TodoClient::new(MemoryBackend::new());
        for name in ["a", "b"] {
            let item = NewTodoItem { name: name.to_string(), category: "c".to_string(), complete: false };
            client.create_todo_item(item).await.unwrap();
        }
        client.transport().clear_requests();

        for marker in &markers {
            client.update_todo_item(marker.id.clone(), marker.complete).await.unwrap();
        }

        let sent: Vec<ApiRequest> = client
            .transport()
            .requests()
            .iter()
            .map(|body| ApiRequest::from_form(body).unwrap())
            .collect();
        assert_eq!(
            sent,
            vec![
                ApiRequest::UpdateTodoItem { id: TodoId::new("1"), complete: true },
                ApiRequest::UpdateTodoItem { id: TodoId::new("0"), complete: false },
            ]
        );

        store_finish_update(&store);

        let control = store.update_control().get_untracked();
        assert_eq!(control, UpdateControl::Idle);
        assert!(!control.is_disabled());
        assert_eq!(control.label(), UPDATE_LABEL);
    }
}
