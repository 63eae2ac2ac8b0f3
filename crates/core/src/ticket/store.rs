//! In-memory ticket store.

use std::collections::{HashSet, VecDeque};

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::intake::ValidIntake;
use crate::ticket::{Status, StatusCounts, StatusFilter, Ticket};

/// Error type for ticket operations.
///
/// Store mutations never fail; these only come from parsing input or
/// building a store out of existing tickets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicketError {
    /// Two tickets share an id.
    #[error("Duplicate ticket id: {0}")]
    DuplicateId(String),

    /// Value is not one of the four statuses.
    #[error("Unknown ticket status: {0}")]
    UnknownStatus(String),
}

/// Authoritative collection of tickets for one desk session, newest first.
///
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice even after the ticket holding it is deleted.
#[derive(Debug, Clone)]
pub struct TicketStore {
    tickets: VecDeque<Ticket>,
    // Wider than any id parsed back from existing tickets, so seeding past
    // `u64::MAX` cannot overflow.
    next_id: u128,
}

impl TicketStore {
    /// Create an empty store. The first ticket gets id "1".
    pub fn new() -> Self {
        Self {
            tickets: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Create a store holding `tickets` in the given order.
    ///
    /// The id counter starts one past the largest numeric id present.
    pub fn with_tickets(tickets: Vec<Ticket>) -> Result<Self, TicketError> {
        let mut seen = HashSet::with_capacity(tickets.len());
        for ticket in &tickets {
            if !seen.insert(ticket.id()) {
                return Err(TicketError::DuplicateId(ticket.id().to_string()));
            }
        }

        Ok(Self::from_distinct(tickets))
    }

    /// Create a store populated with the sample tickets.
    pub fn seeded() -> Self {
        Self::from_distinct(crate::fixtures::seed_tickets())
    }

    fn from_distinct(tickets: Vec<Ticket>) -> Self {
        let next_id = tickets
            .iter()
            .filter_map(|t| t.id().parse::<u64>().ok())
            .max()
            .map_or(1, |max| u128::from(max) + 1);

        Self {
            tickets: tickets.into(),
            next_id,
        }
    }

    /// Open a new ticket from validated intake and put it at the front.
    pub fn add_ticket(&mut self, intake: ValidIntake) -> Ticket {
        let id = self.allocate_id();
        let (customer, request) = intake.into_parts();
        let ticket = Ticket::new(id, customer, request, Status::Open, Utc::now());

        debug!(ticket_id = %ticket.id(), "Ticket added");
        self.tickets.push_front(ticket.clone());
        ticket
    }

    /// Remove the ticket with `id`, returning it. Unknown ids are ignored.
    pub fn delete_ticket(&mut self, id: &str) -> Option<Ticket> {
        let position = self.tickets.iter().position(|t| t.id() == id)?;
        self.tickets.remove(position)
    }

    /// Move the ticket with `id` to `status`. Unknown ids are ignored.
    ///
    /// Every status can follow every other, including itself.
    pub fn set_status(&mut self, id: &str, status: Status) -> Option<&Ticket> {
        let ticket = self.tickets.iter_mut().find(|t| t.id() == id)?;
        ticket.set_status(status);
        Some(&*ticket)
    }

    /// Tickets whose status is visible in `filter`, in store order.
    pub fn list_filtered(&self, filter: &StatusFilter) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| filter.is_visible(t.status()))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id() == id)
    }

    /// All tickets, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn count_by_status(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for ticket in &self.tickets {
            counts.increment(ticket.status());
        }
        counts
    }

    fn allocate_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}
