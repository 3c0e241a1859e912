//! UI Components
//!
//! The three regions of the widget.

mod todo_form;
mod todo_table;
mod update_panel;

pub use todo_form::TodoForm;
pub use todo_table::TodoTable;
pub use update_panel::UpdatePanel;
