//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::Client;

/// Page-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The one API client for this page
    client: StoredValue<Client, LocalStorage>,
}

impl AppContext {
    pub fn new(client: Client) -> Self {
        Self {
            client: StoredValue::new_local(client),
        }
    }

    /// A handle to the client, for moving into a spawned request
    pub fn client(&self) -> Client {
        self.client.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
