//! Sample tickets shown on a fresh desk.

use chrono::{DateTime, TimeZone, Utc};

use crate::ticket::{Status, Ticket};

/// The four sample tickets, ids "1" through "4", in list order.
///
/// Ticket "3" has no fixed opening time and is stamped with the load time.
pub fn seed_tickets() -> Vec<Ticket> {
    vec![
        Ticket::new(
            "1",
            "alice@example.com",
            "My computer is making a strange noise and I cannot seem to find the source. \
             It is a high-pitched whine that occurs every few minutes.",
            Status::Closed,
            at(2023, 10, 27, 10, 0),
        ),
        Ticket::new(
            "2",
            "bob@example.com",
            "I am unable to connect to the new network printer.",
            Status::InProgress,
            at(2023, 10, 28, 11, 30),
        ),
        Ticket::new(
            "3",
            "charlie@example.com",
            "Requesting access to the shared drive for the Q4 marketing campaign. \
             The folder is called \"Marketing_Q4_2023\".",
            Status::Open,
            Utc::now(),
        ),
        Ticket::new(
            "4",
            "diana@example.com",
            "The CRM software is crashing every time I try to export a report.",
            Status::OnHold,
            at(2023, 10, 26, 9, 0),
        ),
    ]
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::validate;

    #[test]
    fn test_seed_ids_and_statuses() {
        let tickets = seed_tickets();
        let summary: Vec<(&str, Status)> = tickets.iter().map(|t| (t.id(), t.status())).collect();
        assert_eq!(
            summary,
            vec![
                ("1", Status::Closed),
                ("2", Status::InProgress),
                ("3", Status::Open),
                ("4", Status::OnHold),
            ]
        );
    }

    #[test]
    fn test_seed_timestamps() {
        let tickets = seed_tickets();
        assert_eq!(tickets[0].created_at().to_rfc3339(), "2023-10-27T10:00:00+00:00");
        assert_eq!(tickets[1].created_at().to_rfc3339(), "2023-10-28T11:30:00+00:00");
        assert_eq!(tickets[3].created_at().to_rfc3339(), "2023-10-26T09:00:00+00:00");
        assert!(tickets[2].created_at() > tickets[1].created_at());
    }

    #[test]
    fn test_seed_tickets_pass_intake_rules() {
        for ticket in seed_tickets() {
            assert!(
                validate(ticket.customer(), ticket.request()).is_ok(),
                "fixture {} should be valid",
                ticket.id()
            );
        }
    }
}
