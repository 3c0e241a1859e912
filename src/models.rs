//! Frontend Models
//!
//! View-side projections of backend todo items.

use todo_protocol::{NewTodoItem, TodoId, TodoItem};

/// Idle label of the update button
pub const UPDATE_LABEL: &str = "Update Tasks";
/// Label while update requests are being fired
pub const UPDATING_LABEL: &str = "Updating...";

/// One appended table row
///
/// `key` is the append index, so rendering the same item twice yields two
/// distinct rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: usize,
    pub item: TodoItem,
}

/// Completion change not yet sent to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMarker {
    pub id: TodoId,
    pub complete: bool,
}

/// Row styling, derived only from the completion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Complete,
    Incomplete,
}

impl RowClass {
    pub fn for_complete(complete: bool) -> Self {
        if complete { RowClass::Complete } else { RowClass::Incomplete }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RowClass::Complete => "active",
            RowClass::Incomplete => "warning",
        }
    }
}

/// Update button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateControl {
    #[default]
    Idle,
    Submitting,
}

impl UpdateControl {
    pub fn is_disabled(&self) -> bool {
        matches!(self, UpdateControl::Submitting)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UpdateControl::Idle => UPDATE_LABEL,
            UpdateControl::Submitting => UPDATING_LABEL,
        }
    }
}

/// Contents of the create inputs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateDraft {
    pub name: String,
    pub category: String,
}

impl CreateDraft {
    /// Take both inputs as a new incomplete item, leaving them empty.
    ///
    /// No validation: empty inputs are submitted as-is.
    pub fn submit(&mut self) -> NewTodoItem {
        NewTodoItem {
            name: std::mem::take(&mut self.name),
            category: std::mem::take(&mut self.category),
            complete: false,
        }
    }
}
