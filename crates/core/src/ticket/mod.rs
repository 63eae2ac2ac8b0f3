//! Ticket system for tracking customer call requests.

mod store;
mod types;

pub use store::{TicketError, TicketStore};
pub use types::{Status, StatusCounts, StatusFilter, Ticket};
