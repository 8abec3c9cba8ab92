use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{db::EventStore, domain::Event, errors::AppError};

#[derive(Clone, Default)]
pub struct MemoryEventStore {
    events: Arc<RwLock<HashMap<String, Event>>>,
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn put_event(&self, event: Event) -> Result<Event, AppError> {
        self.events
            .write()
            .await
            .insert(event.id.clone(), event.clone());
        Ok(event)
    }

    async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.events.read().await.values().cloned().collect())
    }

    async fn get_event(&self, id: &str) -> Result<Event, AppError> {
        let maybe = self.events.read().await.get(id).cloned();

        maybe.ok_or(AppError::NotFound)
    }
}
