//! Todo Table Component
//!
//! Rows are only ever appended; a row's style and checkbox afterwards
//! follow the user's toggles, not the backend.

use leptos::prelude::*;
use todo_protocol::TodoItem;

use crate::models::{Row, RowClass};
use crate::store::{store_record_pending, use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoTable() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <div class="todoList">
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Complete"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.rows().get()
                        key=|row: &Row| row.key
                        children=move |row: Row| view! { <TodoRow item=row.item /> }
                    />
                </tbody>
            </table>
        </div>
    }
}

/// A single table row with its completion checkbox
#[component]
fn TodoRow(item: TodoItem) -> impl IntoView {
    let store = use_todo_store();
    let (complete, set_complete) = signal(item.complete);
    let id = item.id.clone();
    let checkbox_id = item.id.to_string();

    let on_toggle = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        set_complete.set(checked);
        store_record_pending(&store, id.clone(), checked);
    };

    view! {
        <tr class=move || RowClass::for_complete(complete.get()).as_str()>
            <td>{item.name}</td>
            <td>{item.category}</td>
            <td>
                <input
                    type="checkbox"
                    class="isComplete"
                    id=checkbox_id
                    prop:checked=move || complete.get()
                    on:change=on_toggle
                />
            </td>
        </tr>
    }
}
