use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use uuid::Uuid;

use crate::modules::events::adapters::outbound::event_store::{EventStore, EventStoreError};
use crate::modules::events::core::event::{Event, EventId, NewEvent};
use crate::shared::core::pagination::{Page, PageRequest};

#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    title: String,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            start: row.starts_at,
            end: row.ends_at,
        }
    }
}

#[derive(Clone)]
pub struct PostgresEventStore {
    pool: PgPool,
}

impl PostgresEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url` and brings the schema up to date.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, EventStoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await?;
        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| EventStoreError::Backend(format!("migration failed: {e}")))?;
        Ok(Self::new(pool))
    }
}

#[async_trait::async_trait]
impl EventStore for PostgresEventStore {
    async fn insert(&self, event: NewEvent) -> Result<Event, EventStoreError> {
        let row: EventRow = sqlx::query_as(
            r#"
            INSERT INTO events (id, title, starts_at, ends_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, starts_at, ends_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&event.title)
        .bind(event.start)
        .bind(event.end)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn save(&self, event: Event) -> Result<Event, EventStoreError> {
        let row: EventRow = sqlx::query_as(
            r#"
            INSERT INTO events (id, title, starts_at, ends_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title,
                starts_at = EXCLUDED.starts_at,
                ends_at = EXCLUDED.ends_at
            RETURNING id, title, starts_at, ends_at
            "#,
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(event.start)
        .bind(event.end)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, EventStoreError> {
        let row: Option<EventRow> =
            sqlx::query_as("SELECT id, title, starts_at, ends_at FROM events WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Event::from))
    }

    async fn find_all(&self, request: PageRequest) -> Result<Page<Event>, EventStoreError> {
        let mut tx = self.pool.begin().await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&mut *tx)
            .await?;
        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
            SELECT id, title, starts_at, ends_at
            FROM events
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::try_from(request.size).unwrap_or(i64::MAX))
        .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;

        let content = rows.into_iter().map(Event::from).collect();
        Ok(Page::new(content, request, total.max(0) as u64))
    }

    async fn delete_by_id(&self, id: EventId) -> Result<(), EventStoreError> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
