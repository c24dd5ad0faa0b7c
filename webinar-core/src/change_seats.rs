use std::sync::Arc;
use uuid::Uuid;
use tracing::{info, warn};

use crate::repository::{RepositoryError, WebinarRepository};
use crate::user::User;
use crate::webinar::SeatsError;

#[derive(Debug, Clone)]
pub struct ChangeSeatsRequest {
    pub requesting_user: User,
    pub webinar_id: Uuid,
    pub seats: u32,
}

/// Changes the seat capacity of a webinar on behalf of its organizer.
///
/// Checks run in a fixed order: existence, ownership, decrease, maximum.
/// The first failure is returned and nothing is saved.
#[derive(Clone)]
pub struct ChangeSeats {
    repository: Arc<dyn WebinarRepository>,
}

impl ChangeSeats {
    pub fn new(repository: Arc<dyn WebinarRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: ChangeSeatsRequest) -> Result<(), ChangeSeatsError> {
        let mut webinar = self.repository.find_by_id(request.webinar_id).await
            .map_err(ChangeSeatsError::Repository)?
            .ok_or(ChangeSeatsError::WebinarNotFound)?;

        if !webinar.is_organizer(&request.requesting_user) {
            warn!(
                "User {} tried to change seats of webinar {} owned by {}",
                request.requesting_user.id, webinar.id(), webinar.organizer_id()
            );
            return Err(ChangeSeatsError::NotOrganizer);
        }

        let previous = webinar.seats();
        webinar.change_seats(request.seats).map_err(|e| {
            warn!("Rejected seat change on webinar {}: {}", webinar.id(), e);
            ChangeSeatsError::from(e)
        })?;

        self.repository.save(&webinar).await
            .map_err(ChangeSeatsError::Repository)?;

        info!("Webinar {} seats changed: {} -> {}", webinar.id(), previous, webinar.seats());
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChangeSeatsError {
    #[error("Webinar not found")]
    WebinarNotFound,

    #[error("User is not allowed to update this webinar")]
    NotOrganizer,

    #[error("You cannot reduce the number of seats")]
    SeatCountDecreased,

    #[error("Webinar must have at most 1000 seats")]
    SeatCountExceedsMaximum,

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<SeatsError> for ChangeSeatsError {
    fn from(err: SeatsError) -> Self {
        match err {
            SeatsError::Decreased { .. } => ChangeSeatsError::SeatCountDecreased,
            SeatsError::ExceedsMaximum { .. } => ChangeSeatsError::SeatCountExceedsMaximum,
        }
    }
}
