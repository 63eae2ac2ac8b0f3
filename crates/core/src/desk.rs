//! The call desk session: one ticket store plus the list view's status filter.
//!
//! A presentation layer holds a `CallDesk` and calls one method per user
//! gesture. Nothing here is shared or global; whoever owns the desk owns the
//! session.

use tracing::{debug, info};

use crate::intake::{validate, ValidationErrors};
use crate::ticket::{Status, StatusFilter, Ticket, TicketStore};

#[derive(Debug, Clone, Default)]
pub struct CallDesk {
    store: TicketStore,
    filter: StatusFilter,
}

impl CallDesk {
    /// Create a desk over `store` with every status visible.
    pub fn new(store: TicketStore) -> Self {
        Self {
            store,
            filter: StatusFilter::all(),
        }
    }

    /// Create a desk with the sample tickets loaded.
    pub fn seeded() -> Self {
        Self::new(TicketStore::seeded())
    }

    /// Validate a new call request and open a ticket for it.
    ///
    /// On failure the store is left untouched and every broken rule is
    /// reported.
    pub fn submit(&mut self, customer: &str, request: &str) -> Result<Ticket, ValidationErrors> {
        let intake = validate(customer, request).inspect_err(|errors| {
            debug!(errors = errors.len(), "Call request rejected at intake");
        })?;

        let ticket = self.store.add_ticket(intake);
        info!(ticket_id = %ticket.id(), customer = %ticket.customer(), "Ticket opened");
        Ok(ticket)
    }

    /// Delete a ticket. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) -> Option<Ticket> {
        let removed = self.store.delete_ticket(id);
        match &removed {
            Some(ticket) => {
                info!(ticket_id = %ticket.id(), status = %ticket.status(), "Ticket deleted")
            }
            None => debug!(ticket_id = %id, "Delete ignored, no such ticket"),
        }
        removed
    }

    /// Move a ticket to `status`, returning its previous status and the
    /// updated ticket. Unknown ids are ignored.
    pub fn set_status(&mut self, id: &str, status: Status) -> Option<(Status, &Ticket)> {
        let previous = self.store.get(id)?.status();
        let ticket = self.store.set_status(id, status)?;
        info!(ticket_id = %id, from = %previous, to = %status, "Ticket status changed");
        Some((previous, ticket))
    }

    /// Show or hide tickets with `status` in the list view.
    pub fn set_filter(&mut self, status: Status, visible: bool) {
        self.filter.set(status, visible);
        debug!(status = %status, visible, "Status filter changed");
    }

    /// Make every status visible again.
    pub fn reset_filter(&mut self) {
        self.filter = StatusFilter::all();
    }

    pub fn filter(&self) -> &StatusFilter {
        &self.filter
    }

    /// Tickets the list view shows under the current filter.
    pub fn visible_tickets(&self) -> Vec<&Ticket> {
        self.store.list_filtered(&self.filter)
    }

    pub fn store(&self) -> &TicketStore {
        &self.store
    }
}
