use crate::model::{id::BookingId, room::Room};

pub mod event;

// ユーザーの現在の宿泊予約
// 予約 ID と予約先の部屋の情報を合わせて保持する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub booking_id: BookingId,
    pub room: Room,
}
