use crate::database::{model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, RoomId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    // ユーザーの予約を部屋の情報と INNER JOIN して取得する
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT
                    b.booking_id,
                    r.room_id,
                    r.room_name,
                    r.capacity,
                    r.hotel_id
                FROM bookings AS b
                INNER JOIN rooms AS r ON b.room_id = r.room_id
                WHERE b.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Booking::from))
    }

    async fn count_by_room_id(&self, room_id: RoomId) -> AppResult<i64> {
        sqlx::query_scalar(
            r#"
                SELECT COUNT(*)
                FROM bookings
                WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        sqlx::query_scalar(
            r#"
                INSERT INTO bookings (user_id, room_id)
                VALUES ($1, $2)
                RETURNING booking_id
            "#,
        )
        .bind(event.user_id)
        .bind(event.room_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<BookingId> {
        let booking_id: Option<BookingId> = sqlx::query_scalar(
            r#"
                UPDATE bookings
                SET
                    room_id = $2,
                    updated_at = CURRENT_TIMESTAMP
                WHERE booking_id = $1
                RETURNING booking_id
            "#,
        )
        .bind(event.booking_id)
        .bind(event.room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        booking_id.ok_or_else(|| {
            AppError::NoRowsAffectedError("No booking record has been updated".into())
        })
    }
}
