//! Todo Form Component
//!
//! Name and category inputs with the create button.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;
use crate::models::CreateDraft;
use crate::store::use_todo_store;

/// Create control
///
/// Inputs are cleared as soon as the request is fired, not when it returns.
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();
    let draft = RwSignal::new(CreateDraft::default());

    let on_create = move |_| {
        let item = draft.write().submit();
        commands::create_todo_item(ctx.client(), store, item);
    };

    view! {
        <div class="todoForm">
            <input
                type="text"
                id="inputItemName"
                placeholder="Name"
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
            <input
                type="text"
                id="inputItemCategory"
                placeholder="Category"
                prop:value=move || draft.with(|d| d.category.clone())
                on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
            />
            <button type="button" on:click=on_create>"Add Task"</button>
        </div>
    }
}
