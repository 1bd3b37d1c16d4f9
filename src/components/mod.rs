//! UI Components
//!
//! Reusable Leptos components.

mod clear_list_button;
mod new_item_form;
mod todo_list_view;
mod todo_row;

pub use clear_list_button::ClearListButton;
pub use new_item_form::NewItemForm;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
