//! Update Panel Component
//!
//! Holds the pending markers as hidden inputs and the button that sends
//! them.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::UPDATE_REENABLE_DELAY_MS;
use crate::context::use_app_context;
use crate::models::PendingMarker;
use crate::store::{store_begin_update, store_finish_update, use_todo_store, TodoStateStoreFields};

/// Update control
///
/// On click every marker is sent and removed right away. The button comes
/// back after a fixed delay whether or not the requests have finished.
#[component]
pub fn UpdatePanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let on_update = move |_| {
        let markers = store_begin_update(&store);
        log::debug!("[UPDATE] sending {} pending changes", markers.len());

        let client = ctx.client();
        for marker in markers {
            commands::update_todo_item(client.clone(), marker);
        }

        spawn_local(async move {
            TimeoutFuture::new(UPDATE_REENABLE_DELAY_MS).await;
            store_finish_update(&store);
        });
    };

    view! {
        <div class="todoUpdatePanel">
            <form on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                <For
                    each=move || store.pending().get()
                    key=|marker: &PendingMarker| (marker.id.clone(), marker.complete)
                    children=move |marker: PendingMarker| view! {
                        <input
                            type="hidden"
                            class="updateComplete"
                            name=marker.id.to_string()
                            value=marker.complete.to_string()
                        />
                    }
                />
            </form>
            <button
                type="button"
                disabled=move || store.update_control().get().is_disabled()
                on:click=on_update
            >
                {move || store.update_control().get().label()}
            </button>
        </div>
    }
}
