use std::cell::Cell;

/// Independent request streams. A newer request only supersedes older
/// requests of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Listing,
    Detail,
    Related,
    Recent,
    Stories,
}

impl Operation {
    const COUNT: usize = 5;

    fn index(self) -> usize {
        match self {
            Self::Listing => 0,
            Self::Detail => 1,
            Self::Related => 2,
            Self::Recent => 3,
            Self::Stories => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub operation: Operation,
    pub seq: u64,
}

/// Monotonic per-operation request counter.
///
/// Issue a ticket before awaiting; after the await, only commit if the
/// ticket is still current.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: [Cell<u64>; Operation::COUNT],
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, operation: Operation) -> Ticket {
        let slot = &self.latest[operation.index()];
        let seq = slot.get() + 1;
        slot.set(seq);
        Ticket {
            operation,
            seq,
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest[ticket.operation.index()].get() == ticket.seq
    }

    pub fn latest(&self, operation: Operation) -> u64 {
        self.latest[operation.index()].get()
    }
}
