use std::sync::Arc;
use webinar_core::{ChangeSeats, WebinarRepository};

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
}

#[derive(Clone)]
pub struct AppState {
    pub change_seats: ChangeSeats,
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(webinar_repo: Arc<dyn WebinarRepository>, auth: AuthConfig) -> Self {
        Self {
            change_seats: ChangeSeats::new(webinar_repo),
            auth,
        }
    }
}
