//! API Requests
//!
//! Form encoding of the three backend calls.

use std::collections::HashMap;

use crate::error::ProtocolError;
use crate::item::{NewTodoItem, TodoId};

/// Form field names shared with the backend
pub mod fields {
    pub const METHOD: &str = "method";
    pub const ITEM_ID: &str = "todoItemId";
    pub const ITEM_NAME: &str = "todoItemName";
    pub const ITEM_CATEGORY: &str = "todoItemCategory";
    pub const ITEM_COMPLETE: &str = "todoItemComplete";
}

/// Value of the `method` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    CreateTodoItem,
    GetTodoItems,
    UpdateTodoItem,
}

impl ApiMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiMethod::CreateTodoItem => "createTodoItem",
            ApiMethod::GetTodoItems => "getTodoItems",
            ApiMethod::UpdateTodoItem => "updateTodoItem",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "createTodoItem" => Some(ApiMethod::CreateTodoItem),
            "getTodoItems" => Some(ApiMethod::GetTodoItems),
            "updateTodoItem" => Some(ApiMethod::UpdateTodoItem),
            _ => None,
        }
    }
}

/// One backend call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    CreateTodoItem(NewTodoItem),
    GetTodoItems,
    UpdateTodoItem { id: TodoId, complete: bool },
}

impl ApiRequest {
    pub fn method(&self) -> ApiMethod {
        match self {
            ApiRequest::CreateTodoItem(_) => ApiMethod::CreateTodoItem,
            ApiRequest::GetTodoItems => ApiMethod::GetTodoItems,
            ApiRequest::UpdateTodoItem { .. } => ApiMethod::UpdateTodoItem,
        }
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    ///
    /// `method` always comes first; booleans are sent as `true` / `false`.
    pub fn to_form(&self) -> Result<String, ProtocolError> {
        let mut pairs: Vec<(&str, String)> = vec![(fields::METHOD, self.method().as_str().to_string())];

        match self {
            ApiRequest::CreateTodoItem(item) => {
                pairs.push((fields::ITEM_NAME, item.name.clone()));
                pairs.push((fields::ITEM_CATEGORY, item.category.clone()));
                pairs.push((fields::ITEM_COMPLETE, item.complete.to_string()));
            }
            ApiRequest::GetTodoItems => {}
            ApiRequest::UpdateTodoItem { id, complete } => {
                pairs.push((fields::ITEM_ID, id.to_string()));
                pairs.push((fields::ITEM_COMPLETE, complete.to_string()));
            }
        }

        Ok(serde_urlencoded::to_string(&pairs)?)
    }

    /// Decode a form body the way the backend reads it.
    ///
    /// The completion flag is true only for a case-insensitive `true`; a
    /// missing or malformed flag reads as false.
    pub fn from_form(body: &str) -> Result<Self, ProtocolError> {
        let params: HashMap<String, String> = serde_urlencoded::from_str(body)?;
        let param = |key: &'static str| params.get(key).map(String::as_str);
        let required = |key: &'static str| param(key).map(str::to_string).ok_or(ProtocolError::MissingField(key));

        let method = param(fields::METHOD).unwrap_or_default();
        let complete = param(fields::ITEM_COMPLETE)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        match ApiMethod::parse(method) {
            Some(ApiMethod::CreateTodoItem) => Ok(ApiRequest::CreateTodoItem(NewTodoItem {
                name: required(fields::ITEM_NAME)?,
                category: required(fields::ITEM_CATEGORY)?,
                complete,
            })),
            Some(ApiMethod::GetTodoItems) => Ok(ApiRequest::GetTodoItems),
            Some(ApiMethod::UpdateTodoItem) => Ok(ApiRequest::UpdateTodoItem {
                id: TodoId::new(required(fields::ITEM_ID)?),
                complete,
            }),
            None => Err(ProtocolError::UnknownMethod(method.to_string())),
        }
    }
}
