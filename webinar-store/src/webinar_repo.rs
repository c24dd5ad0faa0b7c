use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use webinar_core::{RepositoryError, Webinar, WebinarProps, WebinarRepository};

pub struct StoreWebinarRepository {
    pool: PgPool,
}

impl StoreWebinarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct WebinarRow {
    id: Uuid,
    organizer_id: String,
    title: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    seats: i32,
}

impl WebinarRow {
    /// Rows that break the entity invariants are reported, never loaded.
    fn into_webinar(self) -> Result<Webinar, RepositoryError> {
        let seats = u32::try_from(self.seats)
            .map_err(|_| format!("Webinar {} has invalid seat count {}", self.id, self.seats))?;

        Ok(Webinar::new(WebinarProps {
            id: self.id,
            organizer_id: self.organizer_id,
            title: self.title,
            start_date: self.start_date,
            end_date: self.end_date,
            seats,
        })?)
    }
}

#[async_trait]
impl WebinarRepository for StoreWebinarRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Webinar>, RepositoryError> {
        let row = sqlx::query_as::<_, WebinarRow>(
            r#"
            SELECT id, organizer_id, title, start_date, end_date, seats
            FROM webinars
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(WebinarRow::into_webinar).transpose()
    }

    async fn save(&self, webinar: &Webinar) -> Result<(), RepositoryError> {
        let seats = i32::try_from(webinar.seats())?;

        // Single statement, so a concurrent writer sees either version, never a mix
        sqlx::query(
            r#"
            INSERT INTO webinars (id, organizer_id, title, start_date, end_date, seats)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                start_date = EXCLUDED.start_date,
                end_date = EXCLUDED.end_date,
                seats = EXCLUDED.seats,
                updated_at = NOW()
            "#,
        )
        .bind(webinar.id())
        .bind(webinar.organizer_id())
        .bind(webinar.title())
        .bind(webinar.start_date())
        .bind(webinar.end_date())
        .bind(seats)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Saved webinar {}", webinar.id());
        Ok(())
    }
}
