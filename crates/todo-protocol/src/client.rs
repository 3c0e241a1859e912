//! Todo API Client
//!
//! One async operation per backend action. Each call is independent: the
//! client adds no sequencing between requests and never retries.

use crate::error::ProtocolError;
use crate::item::{decode_item, decode_items, NewTodoItem, TodoId, TodoItem};
use crate::request::ApiRequest;
use crate::transport::Transport;

#[derive(Debug, Clone)]
pub struct TodoClient<T> {
    transport: T,
}

impl<T: Transport> TodoClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create an item; resolves to the backend's copy with its assigned id.
    pub async fn create_todo_item(&self, item: NewTodoItem) -> Result<TodoItem, ProtocolError> {
        let body = self.send(ApiRequest::CreateTodoItem(item)).await?;
        decode_item(&body)
    }

    /// Fetch every item in backend order
    pub async fn get_todo_items(&self) -> Result<Vec<TodoItem>, ProtocolError> {
        let body = self.send(ApiRequest::GetTodoItems).await?;
        decode_items(&body)
    }

    /// Set an item's completion flag. The response body is not inspected.
    pub async fn update_todo_item(&self, id: TodoId, complete: bool) -> Result<(), ProtocolError> {
        self.send(ApiRequest::UpdateTodoItem { id, complete }).await?;
        Ok(())
    }

    async fn send(&self, request: ApiRequest) -> Result<String, ProtocolError> {
        let body = request.to_form()?;
        log::debug!("[API] {} -> {}", request.method().as_str(), body);
        self.transport.post_form(body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use crate::request::fields;

    fn client() -> TodoClient<MemoryBackend> {
        TodoClient::new(MemoryBackend::new())
    }

    fn new_item(name: &str, category: &str) -> NewTodoItem {
        NewTodoItem { name: name.to_string(), category: category.to_string(), complete: false }
    }

    #[tokio::test]
    async fn test_create_sends_one_request() {
        let client = client();

        let created = client.create_todo_item(new_item("Buy milk", "Errands")).await.expect("create failed");

        assert_eq!(created.name, "Buy milk");
        assert_eq!(created.category, "Errands");
        assert!(!created.complete);

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            ApiRequest::from_form(&requests[0]).unwrap(),
            ApiRequest::CreateTodoItem(new_item("Buy milk", "Errands"))
        );
        assert!(requests[0].contains(&format!("{}=false", fields::ITEM_COMPLETE)));
    }

    #[tokio::test]
    async fn test_get_returns_items_in_backend_order() {
        let client = client();
        for name in ["first", "second", "third"] {
            client.create_todo_item(new_item(name, "c")).await.unwrap();
        }

        let items = client.get_todo_items().await.expect("list failed");

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_update_each_call_is_one_request() {
        let client = client();
        let a = client.create_todo_item(new_item("a", "c")).await.unwrap();
        let b = client.create_todo_item(new_item("b", "c")).await.unwrap();
        client.transport().clear_requests();

        client.update_todo_item(a.id.clone(), true).await.unwrap();
        client.update_todo_item(b.id.clone(), false).await.unwrap();

        let sent: Vec<ApiRequest> = client
            .transport()
            .requests()
            .iter()
            .map(|body| ApiRequest::from_form(body).unwrap())
            .collect();
        assert_eq!(
            sent,
            vec![
                ApiRequest::UpdateTodoItem { id: a.id, complete: true },
                ApiRequest::UpdateTodoItem { id: b.id, complete: false },
            ]
        );

        let items = client.get_todo_items().await.unwrap();
        assert!(items[0].complete);
        assert!(!items[1].complete);
    }

    #[tokio::test]
    async fn test_update_unknown_id_surfaces_status() {
        let client = client();

        let err = client.update_todo_item(TodoId::new("404"), true).await.unwrap_err();
        assert!(matches!(err, ProtocolError::Status(500)));
    }

    #[tokio::test]
    async fn test_offline_backend_fails_without_side_effects() {
        let client = client();
        client.transport().set_offline(true);

        let err = client.create_todo_item(new_item("lost", "c")).await.unwrap_err();
        assert!(matches!(err, ProtocolError::Transport(_)));

        client.transport().set_offline(false);
        assert!(client.get_todo_items().await.unwrap().is_empty());
    }
}
