use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::ticket::{StageCategory, Ticket, WorkflowCategory};
use crate::dto::search::{SearchPageData, SearchQuery};
use crate::pagination::Paginated;
use crate::repository::TicketReader;
use crate::search::{MonthNames, SearchMatcher, normalize};
use crate::services::{ServiceError, ServiceResult};

const OPEN_STAGE_KEYWORDS: &[&str] = &["abierto", "pendiente", "recibido"];
const IN_PROGRESS_STAGE_KEYWORDS: &[&str] = &["progreso", "proceso"];
const COMPLETED_STAGE_KEYWORDS: &[&str] = &["completado", "finalizado"];

/// Board-level filters applied before the text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketViewFilter {
    /// Keep tickets carrying any of these tags. Empty disables the check.
    pub tags: Vec<String>,
    pub show_completed: bool,
    pub show_deleted: bool,
}

impl TicketViewFilter {
    pub fn allows(&self, ticket: &Ticket) -> bool {
        if !self.tags.is_empty() && !ticket.tags.iter().any(|tag| self.tags.contains(tag)) {
            return false;
        }
        if !self.show_completed && ticket.is_completed() {
            return false;
        }
        if !self.show_deleted && ticket.is_deleted() {
            return false;
        }
        true
    }
}

/// Counters shown above the ticket board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl TicketStats {
    /// Counts tickets per stage bucket.
    ///
    /// Buckets are decided by the stage categories. Companies that never
    /// configured categories get every bucket at zero, so an empty bucket is
    /// recounted from keywords in the stage name instead. A ticket is overdue
    /// once its due timestamp has passed `now`.
    pub fn compute(tickets: &[Ticket], now: DateTime<Utc>) -> Self {
        let open = count_or_fallback(
            tickets,
            |t| {
                t.workflow_category() == Some(WorkflowCategory::Waiting)
                    || t.stage_category() == Some(StageCategory::Open)
            },
            OPEN_STAGE_KEYWORDS,
        );
        let in_progress = count_or_fallback(
            tickets,
            |t| {
                matches!(
                    t.workflow_category(),
                    Some(WorkflowCategory::Analysis | WorkflowCategory::Action)
                ) || t.stage_category() == Some(StageCategory::InProgress)
            },
            IN_PROGRESS_STAGE_KEYWORDS,
        );
        let completed = count_or_fallback(
            tickets,
            |t| {
                matches!(
                    t.workflow_category(),
                    Some(WorkflowCategory::Final | WorkflowCategory::Cancel)
                ) || t.stage_category() == Some(StageCategory::Completed)
            },
            COMPLETED_STAGE_KEYWORDS,
        );
        let overdue = tickets
            .iter()
            .filter(|t| {
                t.due_date
                    .as_ref()
                    .and_then(|due| due.instant())
                    .is_some_and(|due| due < now)
            })
            .count();

        Self {
            total: tickets.len(),
            open,
            in_progress,
            completed,
            overdue,
        }
    }
}

fn count_or_fallback<F>(tickets: &[Ticket], by_category: F, keywords: &[&str]) -> usize
where
    F: Fn(&Ticket) -> bool,
{
    let counted = tickets.iter().filter(|t| by_category(t)).count();
    if counted > 0 {
        return counted;
    }

    tickets
        .iter()
        .filter(|t| {
            let name = normalize(t.stage_name());
            keywords.iter().any(|keyword| name.contains(keyword))
        })
        .count()
}

/// Loads all tickets, applies the board filters and the text search and
/// returns the requested page.
pub fn search_tickets<R, M>(
    repo: &R,
    matcher: &SearchMatcher<M>,
    query: SearchQuery,
) -> ServiceResult<SearchPageData<Ticket>>
where
    R: TicketReader + ?Sized,
    M: MonthNames,
{
    let tickets = repo.list_tickets().map_err(|err| {
        log::error!("Failed to load tickets: {err}");
        ServiceError::from(err)
    })?;

    let visible: Vec<Ticket> = tickets
        .into_iter()
        .filter(|ticket| query.view.allows(ticket))
        .collect();

    let matched = matcher.filter_owned(visible, query.search.as_deref().unwrap_or_default());

    Ok(SearchPageData {
        results: Paginated::from_matches(matched, query.page, query.per_page),
        search_query: query.search,
    })
}

/// Computes the board counters over every ticket in the data source.
pub fn ticket_stats<R>(repo: &R, now: DateTime<Utc>) -> ServiceResult<TicketStats>
where
    R: TicketReader + ?Sized,
{
    let tickets = repo.list_tickets().map_err(|err| {
        log::error!("Failed to load tickets: {err}");
        ServiceError::from(err)
    })?;

    Ok(TicketStats::compute(&tickets, now))
}
