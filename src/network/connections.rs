//! Resolution of connection rows into the subject's accepted and pending peers.

use crate::types::{ConnectionRecord, ConnectionStatus};
use ahash::AHashSet;

/// Peers of one subject, derived from the rows in which the subject appears.
///
/// A connection is accepted regardless of who sent it, so every row is read relative to
/// the subject. Pending requests are tracked per direction: outgoing ones flag
/// suggestions, incoming ones are waiting for the subject to answer.
#[derive(Debug, Clone, Default)]
pub struct ConnectionSet {
    accepted: Vec<String>,
    accepted_lookup: AHashSet<String>,
    pending_outgoing: AHashSet<String>,
    pending_incoming: Vec<String>,
}

impl ConnectionSet {
    pub fn resolve(subject: &str, records: &[ConnectionRecord]) -> Self {
        let mut set = Self::default();

        for record in records {
            let Some(other) = record.other_party(subject) else {
                continue;
            };
            if other == subject {
                continue;
            }

            match record.status {
                ConnectionStatus::Accepted => {
                    if set.accepted_lookup.insert(other.to_string()) {
                        set.accepted.push(other.to_string());
                    }
                }
                ConnectionStatus::Pending if record.party_a == subject => {
                    set.pending_outgoing.insert(other.to_string());
                }
                ConnectionStatus::Pending => {
                    if !set.pending_incoming.iter().any(|id| id == other) {
                        set.pending_incoming.push(other.to_string());
                    }
                }
                ConnectionStatus::Declined => {}
            }
        }

        // A request from someone already connected needs no answer
        let accepted = &set.accepted_lookup;
        set.pending_incoming.retain(|id| !accepted.contains(id));
        set
    }

    /// Accepted peer ids in first-seen order, each once.
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    pub fn is_connected(&self, id: &str) -> bool {
        self.accepted_lookup.contains(id)
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending_outgoing.contains(id)
    }

    pub fn connection_count(&self) -> usize {
        self.accepted.len()
    }

    /// Senders of requests awaiting the subject's answer, in row order, each once.
    pub fn pending_incoming(&self) -> &[String] {
        &self.pending_incoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn row(a: &str, b: &str, status: ConnectionStatus) -> ConnectionRecord {
        ConnectionRecord {
            party_a: a.to_string(),
            party_b: b.to_string(),
            status,
        }
    }

    #[test]
    fn test_accepted_either_direction() {
        let records = vec![
            row("me", "bob", ConnectionStatus::Accepted),
            row("carol", "me", ConnectionStatus::Accepted),
            row("dave", "me", ConnectionStatus::Declined),
        ];
        let set = ConnectionSet::resolve("me", &records);
        check!(set.accepted() == ["bob", "carol"]);
        check!(set.is_connected("carol"));
        check!(!set.is_connected("dave"));
    }

    #[test]
    fn test_duplicate_rows_collapse() {
        let records = vec![
            row("me", "bob", ConnectionStatus::Accepted),
            row("bob", "me", ConnectionStatus::Accepted),
        ];
        check!(ConnectionSet::resolve("me", &records).connection_count() == 1);
    }

    #[test]
    fn test_only_outgoing_requests_are_pending() {
        let records = vec![
            row("me", "bob", ConnectionStatus::Pending),
            row("carol", "me", ConnectionStatus::Pending),
        ];
        let set = ConnectionSet::resolve("me", &records);
        check!(set.is_pending("bob"));
        check!(!set.is_pending("carol"));
        check!(set.connection_count() == 0);
    }

    #[test]
    fn test_incoming_requests() {
        let records = vec![
            row("carol", "me", ConnectionStatus::Pending),
            row("me", "bob", ConnectionStatus::Pending),
            row("dave", "me", ConnectionStatus::Pending),
            row("carol", "me", ConnectionStatus::Pending),
            row("erin", "me", ConnectionStatus::Pending),
            row("me", "erin", ConnectionStatus::Accepted),
            row("frank", "me", ConnectionStatus::Declined),
        ];
        let set = ConnectionSet::resolve("me", &records);
        check!(set.pending_incoming() == ["carol", "dave"]);
        check!(!set.is_pending("carol"));
    }

    #[test]
    fn test_unrelated_and_self_rows_ignored() {
        let records = vec![
            row("x", "y", ConnectionStatus::Accepted),
            row("me", "me", ConnectionStatus::Accepted),
        ];
        check!(ConnectionSet::resolve("me", &records).accepted().is_empty());
    }
}
