//! Tasks domain: todo CRUD with allow-listed partial updates

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Task, TaskPatch};

// Re-export repository types
pub use repository::TaskRepository;

// Re-export API types
pub use api::routes::routes;
pub use api::TasksState;
