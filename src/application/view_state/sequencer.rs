/// Issues increasing sequence numbers to fetches of one view.
///
/// Only the most recently issued ticket may complete; anything older is a
/// superseded response and gets dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue<Q>(&mut self, query: Q) -> FetchTicket<Q> {
        self.latest += 1;
        FetchTicket {
            sequence: self.latest,
            query,
        }
    }

    pub fn is_current<Q>(&self, ticket: &FetchTicket<Q>) -> bool {
        ticket.sequence == self.latest
    }

    pub fn issued(&self) -> u64 {
        self.latest
    }
}

/// A fetch that has been started, carrying the parameters it was started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<Q> {
    sequence: u64,
    pub query: Q,
}

impl<Q> FetchTicket<Q> {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}
