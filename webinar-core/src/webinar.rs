use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

use crate::user::User;

/// Smallest seat capacity a webinar can have.
pub const MIN_SEATS: u32 = 1;
/// Largest seat capacity a webinar can have.
pub const MAX_SEATS: u32 = 1000;

/// Raw attributes of a webinar, as stored or received before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebinarProps {
    pub id: Uuid,
    pub organizer_id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: u32,
}

/// A scheduled webinar. Seat capacity only moves through [`Webinar::change_seats`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WebinarProps", into = "WebinarProps")]
pub struct Webinar {
    id: Uuid,
    organizer_id: String,
    title: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    seats: u32,
}

impl Webinar {
    pub fn new(props: WebinarProps) -> Result<Self, WebinarError> {
        if !(MIN_SEATS..=MAX_SEATS).contains(&props.seats) {
            return Err(WebinarError::SeatsOutOfRange(props.seats));
        }
        if props.end_date < props.start_date {
            return Err(WebinarError::EndsBeforeStart);
        }

        Ok(Self {
            id: props.id,
            organizer_id: props.organizer_id,
            title: props.title,
            start_date: props.start_date,
            end_date: props.end_date,
            seats: props.seats,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn organizer_id(&self) -> &str {
        &self.organizer_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    /// Exact id match, no delegation.
    pub fn is_organizer(&self, user: &User) -> bool {
        self.organizer_id == user.id
    }

    pub fn has_too_many_seats(seats: u32) -> bool {
        seats > MAX_SEATS
    }

    /// Guarded seat transition: never shrinks, never exceeds [`MAX_SEATS`].
    /// The decrease check runs first. On error the webinar is left untouched.
    pub fn change_seats(&mut self, seats: u32) -> Result<(), SeatsError> {
        if seats < self.seats {
            return Err(SeatsError::Decreased {
                current: self.seats,
                requested: seats,
            });
        }
        if Self::has_too_many_seats(seats) {
            return Err(SeatsError::ExceedsMaximum { requested: seats });
        }

        self.seats = seats;
        Ok(())
    }
}

impl TryFrom<WebinarProps> for Webinar {
    type Error = WebinarError;

    fn try_from(props: WebinarProps) -> Result<Self, Self::Error> {
        Webinar::new(props)
    }
}

impl From<Webinar> for WebinarProps {
    fn from(webinar: Webinar) -> Self {
        Self {
            id: webinar.id,
            organizer_id: webinar.organizer_id,
            title: webinar.title,
            start_date: webinar.start_date,
            end_date: webinar.end_date,
            seats: webinar.seats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebinarError {
    #[error("Webinar seats must be between 1 and 1000, got {0}")]
    SeatsOutOfRange(u32),

    #[error("Webinar cannot end before it starts")]
    EndsBeforeStart,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatsError {
    #[error("You cannot reduce the number of seats")]
    Decreased {
        current: u32,
        requested: u32,
    },

    #[error("Webinar must have at most 1000 seats")]
    ExceedsMaximum {
        requested: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn props(seats: u32) -> WebinarProps {
        WebinarProps {
            id: Uuid::new_v4(),
            organizer_id: "alice".to_string(),
            title: "Webinar title".to_string(),
            start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap(),
            seats,
        }
    }

    #[test]
    fn test_new_rejects_out_of_range_seats() {
        assert_eq!(Webinar::new(props(0)).unwrap_err(), WebinarError::SeatsOutOfRange(0));
        assert_eq!(Webinar::new(props(1001)).unwrap_err(), WebinarError::SeatsOutOfRange(1001));
        assert!(Webinar::new(props(1)).is_ok());
        assert!(Webinar::new(props(1000)).is_ok());
    }

    #[test]
    fn test_new_rejects_end_before_start() {
        let mut p = props(100);
        std::mem::swap(&mut p.start_date, &mut p.end_date);

        assert_eq!(Webinar::new(p).unwrap_err(), WebinarError::EndsBeforeStart);
    }

    #[test]
    fn test_is_organizer() {
        let webinar = Webinar::new(props(100)).unwrap();

        assert!(webinar.is_organizer(&User::new("alice")));
        assert!(!webinar.is_organizer(&User::new("bob")));
        assert!(!webinar.is_organizer(&User::new("Alice")));
    }

    #[test]
    fn test_change_seats_transitions() {
        let mut webinar = Webinar::new(props(100)).unwrap();

        webinar.change_seats(100).unwrap();
        assert_eq!(webinar.seats(), 100);

        webinar.change_seats(1000).unwrap();
        assert_eq!(webinar.seats(), 1000);
    }

    #[test]
    fn test_change_seats_rejects_decrease() {
        let mut webinar = Webinar::new(props(100)).unwrap();

        let err = webinar.change_seats(10).unwrap_err();
        assert_eq!(err, SeatsError::Decreased { current: 100, requested: 10 });
        assert_eq!(err.to_string(), "You cannot reduce the number of seats");
        assert_eq!(webinar.seats(), 100);
    }

    #[test]
    fn test_change_seats_rejects_above_maximum() {
        let mut webinar = Webinar::new(props(100)).unwrap();

        let err = webinar.change_seats(1001).unwrap_err();
        assert_eq!(err, SeatsError::ExceedsMaximum { requested: 1001 });
        assert_eq!(err.to_string(), "Webinar must have at most 1000 seats");
        assert_eq!(webinar.seats(), 100);
    }

    #[test]
    fn test_deserialize_enforces_invariants() {
        let mut value = serde_json::to_value(props(100)).unwrap();
        assert!(serde_json::from_value::<Webinar>(value.clone()).is_ok());

        value["seats"] = serde_json::json!(5000);
        assert!(serde_json::from_value::<Webinar>(value).is_err());
    }
}
