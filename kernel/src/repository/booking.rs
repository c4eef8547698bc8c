use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, RoomId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    // ユーザー ID に紐づく予約を、予約先の部屋の情報とあわせて取得する
    // 予約はユーザーごとに高々ひとつしか存在しない
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>>;
    // 部屋を参照している予約の件数（占有数）を取得する
    async fn count_by_room_id(&self, room_id: RoomId) -> AppResult<i64>;
    // 予約を作成する
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // 既存の予約の部屋を変更する
    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<BookingId>;
}
