use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::RecordDate;

/// Workflow bucket a stage belongs to, as configured per company.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowCategory {
    Waiting,
    Analysis,
    Action,
    Final,
    Cancel,
    #[serde(other)]
    Other,
}

/// Coarse board column of a stage.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StageCategory {
    Open,
    InProgress,
    Completed,
    #[serde(other)]
    Other,
}

/// Ticket stage (status) as shown on the board.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Stage {
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(default)]
    pub workflow_category: Option<WorkflowCategory>,
    #[serde(default)]
    pub stage_category: Option<StageCategory>,
}

/// Customer snapshot embedded in a ticket.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct TicketCustomer {
    #[serde(rename = "nombre", default)]
    pub first_name: String,
    #[serde(rename = "apellidos", default)]
    pub last_name: String,
    /// Tax identifier.
    #[serde(rename = "dni", default)]
    pub tax_id: String,
}

/// Name-only reference to a catalogue entry (service or product).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct NamedRef {
    #[serde(rename = "nombre", default)]
    pub name: String,
}

/// One line of work attached to a ticket.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct TicketLine {
    #[serde(rename = "trabajo", default)]
    pub work: Option<NamedRef>,
    #[serde(rename = "producto", default)]
    pub product: Option<NamedRef>,
}

impl TicketLine {
    pub fn work_name(&self) -> &str {
        self.work.as_ref().map_or("", |w| w.name.as_str())
    }

    pub fn product_name(&self) -> &str {
        self.product.as_ref().map_or("", |p| p.name.as_str())
    }
}

/// Support case as loaded from the data source.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Ticket {
    pub id: Uuid,
    /// Per-company sequence number.
    #[serde(rename = "contador")]
    pub number: u64,
    pub created_at: RecordDate,
    #[serde(rename = "fecha_vencimiento", default)]
    pub due_date: Option<RecordDate>,
    #[serde(rename = "cliente", default)]
    pub customer: Option<TicketCustomer>,
    #[serde(rename = "estado", default)]
    pub stage: Option<Stage>,
    #[serde(rename = "lineas", default)]
    pub lines: Vec<TicketLine>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub deleted_at: Option<RecordDate>,
}

impl Ticket {
    pub fn customer_first_name(&self) -> &str {
        self.customer.as_ref().map_or("", |c| c.first_name.as_str())
    }

    pub fn customer_last_name(&self) -> &str {
        self.customer.as_ref().map_or("", |c| c.last_name.as_str())
    }

    pub fn customer_tax_id(&self) -> &str {
        self.customer.as_ref().map_or("", |c| c.tax_id.as_str())
    }

    pub fn stage_name(&self) -> &str {
        self.stage.as_ref().map_or("", |s| s.name.as_str())
    }

    pub fn workflow_category(&self) -> Option<WorkflowCategory> {
        self.stage.as_ref().and_then(|s| s.workflow_category)
    }

    pub fn stage_category(&self) -> Option<StageCategory> {
        self.stage.as_ref().and_then(|s| s.stage_category)
    }

    /// Whether the stage marks the ticket as done.
    pub fn is_completed(&self) -> bool {
        self.workflow_category() == Some(WorkflowCategory::Final)
            || self.stage_category() == Some(StageCategory::Completed)
    }

    /// Whether the ticket was soft-deleted or cancelled.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some() || self.workflow_category() == Some(WorkflowCategory::Cancel)
    }
}
