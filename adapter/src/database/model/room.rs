use kernel::model::{
    id::{HotelId, RoomId},
    room::Room,
};

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub room_name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            room_name,
            capacity,
            hotel_id,
        } = value;
        Room {
            room_id,
            room_name,
            capacity,
            hotel_id,
        }
    }
}
