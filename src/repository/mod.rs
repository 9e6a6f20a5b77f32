//! Data source seams.
//!
//! The matcher never fetches anything itself; services ask a reader for the
//! full record collection and filter it in memory.

use crate::domain::{customer::Customer, ticket::Ticket};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod json;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use json::JsonRepository;

pub trait TicketReader {
    fn list_tickets(&self) -> RepositoryResult<Vec<Ticket>>;
}

pub trait CustomerReader {
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
}
