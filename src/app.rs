//! Todo Widget App
//!
//! Wires the client, the store and the three regions together.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{self, Client};
use crate::components::{TodoForm, TodoTable, UpdatePanel};
use crate::context::AppContext;
use crate::store::{TodoState, TodoStore};

#[component]
pub fn App(client: Client) -> impl IntoView {
    let store: TodoStore = Store::new(TodoState::default());

    provide_context(store);
    provide_context(AppContext::new(client.clone()));

    // Initial load, once per page
    commands::get_todo_items(client, store);

    view! {
        <div class="todo-app">
            <h1>"My ToDo List"</h1>
            <TodoTable />
            <UpdatePanel />
            <TodoForm />
        </div>
    }
}
