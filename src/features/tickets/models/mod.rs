pub mod ticket;

pub use ticket::{Ticket, TicketPriority, TicketStatus};
