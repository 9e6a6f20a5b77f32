#![allow(dead_code)]

use std::io::Write;

use crm_search::domain::customer::Customer;
use crm_search::domain::ticket::{NamedRef, Stage, Ticket, TicketCustomer, TicketLine};
use crm_search::domain::types::RecordDate;
use crm_search::repository::json::Snapshot;
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Snapshot written to a temporary file that is removed on drop.
pub struct TestSnapshot {
    file: NamedTempFile,
}

impl TestSnapshot {
    pub fn new(snapshot: &Snapshot) -> Self {
        let json = serde_json::to_string(snapshot).expect("serialize snapshot");
        Self::from_raw(&json)
    }

    pub fn from_raw(contents: &str) -> Self {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write snapshot");
        Self { file }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}

/// Ticket 42 from the product documentation: José García López, due on the
/// 5th of March 2024, stage "Abierto".
pub fn jose_ticket() -> Ticket {
    Ticket {
        id: Uuid::new_v4(),
        number: 42,
        created_at: RecordDate::new("2024-02-20T09:12:00Z"),
        due_date: Some(RecordDate::new("2024-03-05")),
        customer: Some(TicketCustomer {
            first_name: "José".into(),
            last_name: "García López".into(),
            tax_id: "12345678Z".into(),
        }),
        stage: Some(Stage {
            name: "Abierto".into(),
            ..Stage::default()
        }),
        ..Ticket::default()
    }
}

pub fn ticket_with_line(number: u64, work: &str, product: Option<&str>) -> Ticket {
    Ticket {
        id: Uuid::new_v4(),
        number,
        created_at: RecordDate::new("2024-01-02T10:00:00Z"),
        lines: vec![TicketLine {
            work: Some(NamedRef { name: work.into() }),
            product: product.map(|name| NamedRef { name: name.into() }),
        }],
        ..Ticket::default()
    }
}

pub fn customer(first: &str, last: &str) -> Customer {
    Customer {
        id: Uuid::new_v4(),
        created_at: RecordDate::new("2023-11-28T10:00:00Z"),
        first_name: first.into(),
        last_name: last.into(),
        ..Customer::default()
    }
}
