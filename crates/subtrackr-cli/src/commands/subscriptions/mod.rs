pub mod add;
pub mod delete;
pub mod list;

pub use add::handle_add;
pub use delete::handle_delete;
pub use list::handle_list;
