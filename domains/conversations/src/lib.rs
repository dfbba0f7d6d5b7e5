//! Conversations domain: assistant chat threads and message exchange

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::Conversation;

// Re-export repository types
pub use repository::ConversationRepository;

// Re-export API types
pub use api::routes::routes;
pub use api::ConversationsState;
