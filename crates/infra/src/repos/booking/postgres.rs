use super::{BookingInsertResult, IBookingRepo};
use slotkeeper_domain::{Booking, BookingStatus, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookingRaw {
    booking_uid: Uuid,
    requester_uid: Uuid,
    provider_uid: Uuid,
    requested_date: String,
    requested_time: String,
    status: String,
    topic: String,
    description: String,
    comment: Option<String>,
    response: Option<String>,
    response_timestamp: Option<i64>,
    created: i64,
}

impl TryFrom<BookingRaw> for Booking {
    type Error = anyhow::Error;

    fn try_from(raw: BookingRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.booking_uid.into(),
            requester_id: raw.requester_uid.into(),
            provider_id: raw.provider_uid.into(),
            requested_date: raw.requested_date,
            requested_time: raw.requested_time,
            status: raw.status.parse()?,
            topic: raw.topic,
            description: raw.description,
            comment: raw.comment,
            response: raw.response,
            response_timestamp: raw.response_timestamp,
            created: raw.created,
        })
    }
}

fn to_bookings(rows: Vec<BookingRaw>) -> anyhow::Result<Vec<Booking>> {
    rows.into_iter().map(Booking::try_from).collect()
}

const UNIQUE_VIOLATION: &str = "23505";
const HELD_SLOT_INDEX: &str = "bookings_held_slot";

/// Only the partial index over pending and approved bookings means the slot
/// is taken. Any other unique violation is a storage error.
fn is_held_slot_violation(code: Option<&str>, constraint: Option<&str>) -> bool {
    code == Some(UNIQUE_VIOLATION) && constraint == Some(HELD_SLOT_INDEX)
}

#[async_trait::async_trait]
impl IBookingRepo for PostgresBookingRepo {
    async fn insert(&self, booking: &Booking) -> anyhow::Result<BookingInsertResult> {
        let res = sqlx::query(
            r#"
            INSERT INTO bookings(
                booking_uid,
                requester_uid,
                provider_uid,
                requested_date,
                requested_time,
                status,
                topic,
                description,
                comment,
                response,
                response_timestamp,
                created
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(booking.id.inner_ref())
        .bind(booking.requester_id.inner_ref())
        .bind(booking.provider_id.inner_ref())
        .bind(&booking.requested_date)
        .bind(&booking.requested_time)
        .bind(booking.status.as_str())
        .bind(&booking.topic)
        .bind(&booking.description)
        .bind(&booking.comment)
        .bind(&booking.response)
        .bind(booking.response_timestamp)
        .bind(booking.created)
        .execute(&self.pool)
        .await;

        match res {
            Ok(_) => Ok(BookingInsertResult::Inserted),
            Err(sqlx::Error::Database(e))
                if is_held_slot_violation(e.code().as_deref(), e.constraint()) =>
            {
                Ok(BookingInsertResult::SlotTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find(&self, booking_id: &ID) -> anyhow::Result<Option<Booking>> {
        let raw = sqlx::query_as::<_, BookingRaw>(
            r#"
            SELECT * FROM bookings AS b
            WHERE b.booking_uid = $1
            "#,
        )
        .bind(booking_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        raw.map(Booking::try_from).transpose()
    }

    async fn find_by_status(&self, status: BookingStatus) -> anyhow::Result<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRaw>(
            r#"
            SELECT * FROM bookings AS b
            WHERE b.status = $1
            "#,
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;
        to_bookings(rows)
    }

    async fn find_by_provider_and_date(
        &self,
        provider_id: &ID,
        date: &str,
    ) -> anyhow::Result<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRaw>(
            r#"
            SELECT * FROM bookings AS b
            WHERE b.provider_uid = $1 AND b.requested_date = $2
            "#,
        )
        .bind(provider_id.inner_ref())
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        to_bookings(rows)
    }

    async fn find_by_provider(
        &self,
        provider_id: &ID,
        status: Option<BookingStatus>,
    ) -> anyhow::Result<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRaw>(
            r#"
            SELECT * FROM bookings AS b
            WHERE b.provider_uid = $1 AND ($2::TEXT IS NULL OR b.status = $2)
            ORDER BY b.requested_date, b.requested_time
            "#,
        )
        .bind(provider_id.inner_ref())
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;
        to_bookings(rows)
    }

    async fn find_by_requester(&self, requester_id: &ID) -> anyhow::Result<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRaw>(
            r#"
            SELECT * FROM bookings AS b
            WHERE b.requester_uid = $1
            ORDER BY b.requested_date, b.requested_time
            "#,
        )
        .bind(requester_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;
        to_bookings(rows)
    }

    async fn save_response(&self, booking: &Booking) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE bookings
            SET status = $2,
                response = $3,
                response_timestamp = $4
            WHERE booking_uid = $1 AND status = 'pending'
            "#,
        )
        .bind(booking.id.inner_ref())
        .bind(booking.status.as_str())
        .bind(&booking.response)
        .bind(booking.response_timestamp)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() == 1)
    }
}
