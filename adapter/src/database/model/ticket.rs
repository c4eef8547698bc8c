use kernel::model::{
    id::TicketId,
    ticket::{Ticket, TicketStatus, TicketType},
};

// チケットとチケット種別のフラグを JOIN して取得する際に使う型
#[derive(sqlx::FromRow)]
pub struct TicketRow {
    pub ticket_id: TicketId,
    pub status: TicketStatus,
    pub includes_hotel: bool,
    pub is_remote: bool,
}

impl From<TicketRow> for Ticket {
    fn from(value: TicketRow) -> Self {
        let TicketRow {
            ticket_id,
            status,
            includes_hotel,
            is_remote,
        } = value;
        Ticket {
            ticket_id,
            status,
            ticket_type: TicketType {
                includes_hotel,
                is_remote,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::id::TicketId;

    #[test]
    fn ticket_type_flags_are_nested_into_the_model() {
        let row = TicketRow {
            ticket_id: TicketId::new(1),
            status: TicketStatus::Paid,
            includes_hotel: true,
            is_remote: false,
        };

        let ticket = Ticket::from(row);
        assert_eq!(ticket.ticket_id, TicketId::new(1));
        assert_eq!(ticket.status, TicketStatus::Paid);
        assert!(ticket.ticket_type.includes_hotel);
        assert!(!ticket.ticket_type.is_remote);
    }
}
