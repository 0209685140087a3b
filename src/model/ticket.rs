/// Identifies one scheduled completion. A session only accepts the ticket it
/// issued last; everything older is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct TicketCounter {
    next: u64,
}

impl TicketCounter {
    pub fn issue(&mut self) -> Ticket {
        self.next += 1;
        Ticket(self.next)
    }
}

/// Result of handing a deferred completion back to its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_unique_per_counter() {
        let mut counter = TicketCounter::default();
        let first = counter.issue();
        let second = counter.issue();
        assert_ne!(first, second);
    }
}
