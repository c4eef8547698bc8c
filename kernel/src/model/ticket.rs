use crate::model::id::TicketId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "ticket_status", rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

// チケット種別が持つ宿泊関連のフラグ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketType {
    pub includes_hotel: bool,
    pub is_remote: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

impl Ticket {
    // 宿泊予約が可能なチケットかどうかを判定する
    // 支払い済み、かつ宿泊付き、かつ現地参加のチケットのみ予約できる
    pub fn grants_hotel_stay(&self) -> bool {
        self.status == TicketStatus::Paid
            && self.ticket_type.includes_hotel
            && !self.ticket_type.is_remote
    }
}
