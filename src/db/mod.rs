use async_trait::async_trait;

use crate::{domain::Event, errors::AppError};

pub mod memory;

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Inserts or replaces the event stored under `event.id`. A second put
    /// with the same id replaces the prior record wholesale. Callers enforce
    /// id non-emptiness; the store does not.
    async fn put_event(&self, event: Event) -> Result<Event, AppError>;

    /// All stored events, in no particular order.
    async fn list_events(&self) -> Result<Vec<Event>, AppError>;

    async fn get_event(&self, id: &str) -> Result<Event, AppError>;
}
