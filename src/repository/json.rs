use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{customer::Customer, ticket::Ticket};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, TicketReader};

/// On-disk export of the records the data source serves.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// Reader backed by a JSON snapshot file.
///
/// The file is read on every call so that a refreshed export is picked up
/// without restarting.
#[derive(Debug, Clone)]
pub struct JsonRepository {
    path: PathBuf,
}

impl JsonRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> RepositoryResult<Snapshot> {
        let file = File::open(&self.path)?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;
        log::debug!(
            "Loaded {} tickets and {} customers from {}",
            snapshot.tickets.len(),
            snapshot.customers.len(),
            self.path.display()
        );
        Ok(snapshot)
    }
}

impl TicketReader for JsonRepository {
    fn list_tickets(&self) -> RepositoryResult<Vec<Ticket>> {
        Ok(self.load()?.tickets)
    }
}

impl CustomerReader for JsonRepository {
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
        Ok(self.load()?.customers)
    }
}
