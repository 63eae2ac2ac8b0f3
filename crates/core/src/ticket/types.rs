//! Core ticket data types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TicketError;

// ============================================================================
// Status
// ============================================================================

/// Lifecycle stage of a call ticket.
///
/// Any status may move to any other status; there is no transition table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Open,
    InProgress,
    OnHold,
    Closed,
}

impl Status {
    /// All statuses, in display order.
    pub const ALL: [Status; 4] = [
        Status::Open,
        Status::InProgress,
        Status::OnHold,
        Status::Closed,
    ];

    /// Returns the status as its wire string (for filtering and metrics labels).
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::OnHold => "on_hold",
            Status::Closed => "closed",
        }
    }

    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::OnHold => "On Hold",
            Status::Closed => "Closed",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = TicketError;

    /// Accepts either the wire form (`in_progress`) or the label (`In Progress`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| {
                status.as_str().eq_ignore_ascii_case(trimmed)
                    || status.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| TicketError::UnknownStatus(s.to_string()))
    }
}

// ============================================================================
// Ticket
// ============================================================================

/// A single customer call request.
///
/// Fields are read-only outside this crate: only the store may change a
/// ticket's status, and nothing else is ever mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    id: String,
    customer: String,
    request: String,
    status: Status,
    created_at: DateTime<Utc>,
}

impl Ticket {
    /// Build a ticket from known field values (fixtures, tests, imports).
    ///
    /// New tickets from user input go through `TicketStore::add_ticket` instead.
    pub fn new(
        id: impl Into<String>,
        customer: impl Into<String>,
        request: impl Into<String>,
        status: Status,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            request: request.into(),
            status,
            created_at,
        }
    }

    /// Stable identifier, unique within its store.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Submitter email address.
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Free-text request description.
    pub fn request(&self) -> &str {
        &self.request
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// When the ticket was opened. Never changes.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

// ============================================================================
// Status filter
// ============================================================================

/// Per-status visibility flags for the ticket list view.
///
/// Independent of the tickets themselves; defaults to every status visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFilter {
    visible: [bool; 4],
}

impl StatusFilter {
    /// Every status visible.
    pub fn all() -> Self {
        Self { visible: [true; 4] }
    }

    /// No status visible.
    pub fn none() -> Self {
        Self {
            visible: [false; 4],
        }
    }

    /// Only the given statuses visible.
    pub fn only(statuses: &[Status]) -> Self {
        let mut filter = Self::none();
        for status in statuses {
            filter.set(*status, true);
        }
        filter
    }

    pub fn set(&mut self, status: Status, visible: bool) {
        self.visible[status.index()] = visible;
    }

    /// Builder-style variant of [`StatusFilter::set`].
    pub fn with(mut self, status: Status, visible: bool) -> Self {
        self.set(status, visible);
        self
    }

    pub fn is_visible(&self, status: Status) -> bool {
        self.visible[status.index()]
    }

    /// Visible statuses, in display order.
    pub fn visible_statuses(&self) -> Vec<Status> {
        Status::ALL
            .into_iter()
            .filter(|status| self.is_visible(*status))
            .collect()
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::all()
    }
}

// Serialized as `{ "open": true, "in_progress": false, ... }`.
impl Serialize for StatusFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(Status::ALL.len()))?;
        for status in Status::ALL {
            map.serialize_entry(status.as_str(), &self.is_visible(status))?;
        }
        map.end()
    }
}

// Missing keys keep their default (visible).
impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flags = std::collections::HashMap::<String, bool>::deserialize(deserializer)?;
        let mut filter = Self::all();
        for (key, visible) in flags {
            let status = key.parse::<Status>().map_err(serde::de::Error::custom)?;
            filter.set(status, visible);
        }
        Ok(filter)
    }
}

// ============================================================================
// Status counts
// ============================================================================

/// Number of tickets in each status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub open: usize,
    pub in_progress: usize,
    pub on_hold: usize,
    pub closed: usize,
}

impl StatusCounts {
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Open => self.open,
            Status::InProgress => self.in_progress,
            Status::OnHold => self.on_hold,
            Status::Closed => self.closed,
        }
    }

    pub(crate) fn increment(&mut self, status: Status) {
        match status {
            Status::Open => self.open += 1,
            Status::InProgress => self.in_progress += 1,
            Status::OnHold => self.on_hold += 1,
            Status::Closed => self.closed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.open + self.in_progress + self.on_hold + self.closed
    }
}
