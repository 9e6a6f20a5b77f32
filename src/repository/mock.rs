//! Mock data source for isolating services in tests.

use mockall::mock;

use crate::domain::{customer::Customer, ticket::Ticket};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, TicketReader};

mock! {
    pub Repository {}

    impl TicketReader for Repository {
        fn list_tickets(&self) -> RepositoryResult<Vec<Ticket>>;
    }

    impl CustomerReader for Repository {
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    }
}
