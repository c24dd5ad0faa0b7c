use async_trait::async_trait;
use uuid::Uuid;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::repository::{RepositoryError, WebinarRepository};
use crate::webinar::Webinar;

/// In-memory webinar store, used by tests and local runs
pub struct InMemoryWebinarRepository {
    webinars: RwLock<HashMap<Uuid, Webinar>>,
    saves: AtomicUsize,
}

impl InMemoryWebinarRepository {
    pub fn new(webinars: Vec<Webinar>) -> Self {
        Self {
            webinars: RwLock::new(webinars.into_iter().map(|w| (w.id(), w)).collect()),
            saves: AtomicUsize::new(0),
        }
    }

    /// Current stored copy of a webinar
    pub async fn get(&self, id: Uuid) -> Option<Webinar> {
        self.webinars.read().await.get(&id).cloned()
    }

    /// Number of successful `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryWebinarRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Webinar>, RepositoryError> {
        Ok(self.get(id).await)
    }

    async fn save(&self, webinar: &Webinar) -> Result<(), RepositoryError> {
        self.webinars.write().await.insert(webinar.id(), webinar.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webinar::WebinarProps;
    use chrono::Utc;

    fn webinar(seats: u32) -> Webinar {
        let now = Utc::now();
        Webinar::new(WebinarProps {
            id: Uuid::new_v4(),
            organizer_id: "alice".to_string(),
            title: "Rust in production".to_string(),
            start_date: now,
            end_date: now + chrono::Duration::hours(1),
            seats,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_and_save() {
        let original = webinar(50);
        let id = original.id();
        let repo = InMemoryWebinarRepository::new(vec![original]);

        let mut found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.seats(), 50);
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());

        // Mutating a fetched copy does not touch the store until saved
        found.change_seats(80).unwrap();
        assert_eq!(repo.get(id).await.unwrap().seats(), 50);

        repo.save(&found).await.unwrap();
        assert_eq!(repo.get(id).await.unwrap().seats(), 80);
        assert_eq!(repo.save_count(), 1);
    }
}
