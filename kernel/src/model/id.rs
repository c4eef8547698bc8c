use serde::{Deserialize, Serialize};

// 各エンティティの ID を表す型
// データベースの連番（正の整数）をそのまま包む
macro_rules! define_id {
    ($id_name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Serialize,
            Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $id_name(i32);

        impl $id_name {
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            pub const fn raw(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $id_name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $id_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(UserId);
define_id!(EnrollmentId);
define_id!(TicketId);
define_id!(HotelId);
define_id!(RoomId);
define_id!(BookingId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_serializes_as_plain_integer() {
        let id = BookingId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id.to_string(), "42");
    }
}
