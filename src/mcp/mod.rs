pub mod client;
mod context;
mod error;
pub mod protocol;

pub use client::{HealthEvent, QueryClient, SearchEvent};
pub use context::ConversationContext;
pub use error::QueryError;
pub use protocol::{BackendHealth, QueryResponse};
