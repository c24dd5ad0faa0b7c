pub mod user;
pub mod webinar;
pub mod repository;
pub mod in_memory;
pub mod change_seats;

pub use user::User;
pub use webinar::{SeatsError, Webinar, WebinarError, WebinarProps, MAX_SEATS, MIN_SEATS};
pub use repository::{RepositoryError, WebinarRepository};
pub use in_memory::InMemoryWebinarRepository;
pub use change_seats::{ChangeSeats, ChangeSeatsError, ChangeSeatsRequest};
