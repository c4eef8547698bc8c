use kernel::model::{
    booking::Booking,
    id::{BookingId, HotelId, RoomId},
    room::Room,
};

// 予約と部屋を JOIN して取得する際に使う型
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub room_name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            room_id,
            room_name,
            capacity,
            hotel_id,
        } = value;
        Booking {
            booking_id,
            room: Room {
                room_id,
                room_name,
                capacity,
                hotel_id,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_row_nests_room_attributes() {
        let row = BookingRow {
            booking_id: BookingId::new(10),
            room_id: RoomId::new(7),
            room_name: "Sea View 101".into(),
            capacity: 2,
            hotel_id: HotelId::new(3),
        };

        let booking = Booking::from(row);
        assert_eq!(booking.booking_id, BookingId::new(10));
        assert_eq!(booking.room.room_id, RoomId::new(7));
        assert_eq!(booking.room.capacity, 2);
    }
}
