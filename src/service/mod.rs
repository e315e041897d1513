//! Resource services: one parameterized statement per operation.

mod todos;
mod users;
pub use todos::TodoService;
pub use users::UserService;
