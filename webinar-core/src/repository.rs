use async_trait::async_trait;
use uuid::Uuid;
use crate::webinar::Webinar;

pub type RepositoryError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for webinar data access.
///
/// A missing webinar is `Ok(None)`, not an error. Serialising concurrent
/// writes to the same webinar is up to the implementation.
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Webinar>, RepositoryError>;

    /// Persist the full webinar, replacing any stored version.
    async fn save(
        &self,
        webinar: &Webinar,
    ) -> Result<(), RepositoryError>;
}
