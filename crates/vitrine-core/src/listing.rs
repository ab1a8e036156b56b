use thiserror::Error;
use vitrine_models::PageResult;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("limit must be greater than zero")]
    InvalidLimit,
    #[error("a fetch is already in flight")]
    FetchInFlight,
    #[error("no further pages to load")]
    NoNextPage,
    #[error("stale fetch result discarded")]
    StaleTicket,
}

/// Receipt for one outstanding load-more fetch. The caller queries the
/// backend at `offset` and then reports back with `complete` or `fail`.
#[derive(Debug, Clone, Copy)]
pub struct FetchTicket {
    pub offset: u32,
    seq: u64,
}

/// Accumulated listing state for one view.
///
/// The session moves between two states: idle at some confirmed offset,
/// and fetching the next page. Nodes only ever grow, and only on a
/// confirmed success; a failed or stale fetch leaves both the node list
/// and the offset exactly as they were so the same offset can be
/// retried.
#[derive(Debug)]
pub struct ListingSession<T> {
    nodes: Vec<T>,
    limit: u32,
    offset: u32,
    has_next_page: bool,
    in_flight: Option<u64>,
    seq: u64,
}

impl<T> ListingSession<T> {
    pub fn new(limit: u32) -> Result<Self, ListingError> {
        if limit == 0 {
            return Err(ListingError::InvalidLimit);
        }
        Ok(Self {
            nodes: Vec::new(),
            limit,
            offset: 0,
            has_next_page: false,
            in_flight: None,
            seq: 0,
        })
    }

    /// Install the first page. Replaces any previous contents, so a
    /// filter or sort change simply primes a fresh session.
    pub fn prime(&mut self, page: PageResult<T>) {
        self.nodes = page.nodes;
        self.has_next_page = page.page_info.has_next_page;
        self.offset = 0;
        self.in_flight = None;
        self.seq += 1;
    }

    /// Reserve the next fetch. Rejected while another fetch is pending or
    /// when the backend already reported the end of the list.
    pub fn begin_load_more(&mut self) -> Result<FetchTicket, ListingError> {
        if self.in_flight.is_some() {
            return Err(ListingError::FetchInFlight);
        }
        if !self.has_next_page {
            return Err(ListingError::NoNextPage);
        }
        self.seq += 1;
        self.in_flight = Some(self.seq);
        Ok(FetchTicket {
            offset: self.offset + self.limit,
            seq: self.seq,
        })
    }

    /// Apply a successful fetch: append the new page after the existing
    /// nodes and advance the confirmed offset. A ticket that no longer
    /// matches the session (re-primed, or superseded) is discarded
    /// without touching any state.
    pub fn complete(&mut self, ticket: FetchTicket, page: PageResult<T>) -> Result<(), ListingError> {
        if self.in_flight != Some(ticket.seq) {
            return Err(ListingError::StaleTicket);
        }
        self.nodes.extend(page.nodes);
        self.has_next_page = page.page_info.has_next_page;
        self.offset = ticket.offset;
        self.in_flight = None;
        Ok(())
    }

    /// Record a failed fetch. The offset is not advanced, so the next
    /// `begin_load_more` retries the same offset.
    pub fn fail(&mut self, ticket: FetchTicket) {
        if self.in_flight == Some(ticket.seq) {
            self.in_flight = None;
        }
    }

    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }
}
