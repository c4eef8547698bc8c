use derive_new::new;
use garde::Validate;
use kernel::model::{
    booking::{event::CreateBooking, Booking},
    id::{BookingId, HotelId, RoomId, UserId},
    room::Room,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(range(min = 1))]
    pub room_id: i32,
}

#[derive(new)]
pub struct CreateBookingRequestWithUserId(UserId, CreateBookingRequest);

impl From<CreateBookingRequestWithUserId> for CreateBooking {
    fn from(value: CreateBookingRequestWithUserId) -> Self {
        let CreateBookingRequestWithUserId(user_id, CreateBookingRequest { room_id }) = value;
        CreateBooking {
            user_id,
            room_id: RoomId::new(room_id),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[garde(range(min = 1))]
    pub room_id: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    pub booking_id: BookingId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    // 部屋のキー名は既存クライアントとの互換のため大文字始まり
    #[serde(rename = "Room")]
    pub room: BookingRoomResponse,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking { booking_id, room } = value;
        Self {
            booking_id,
            room: room.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRoomResponse {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
}

impl From<Room> for BookingRoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            room_id,
            room_name,
            capacity,
            hotel_id,
        } = value;
        Self {
            id: room_id,
            name: room_name,
            capacity,
            hotel_id,
        }
    }
}
