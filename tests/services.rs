//! Service tests against the mocked data source.
//! Run with `cargo test --features test-mocks`.
#![cfg(all(feature = "cli", feature = "test-mocks"))]

use chrono::{DateTime, Utc};
use crm_search::domain::ticket::{Stage, StageCategory, Ticket, WorkflowCategory};
use crm_search::domain::types::{PageNumber, PageSize};
use crm_search::dto::search::SearchQuery;
use crm_search::forms::search::SearchForm;
use crm_search::repository::errors::RepositoryError;
use crm_search::repository::mock::MockRepository;
use crm_search::search::{Locale, SearchMatcher};
use crm_search::services::ServiceError;
use crm_search::services::customers::search_customers;
use crm_search::services::tickets::{TicketViewFilter, search_tickets, ticket_stats};

mod common;

fn board() -> Vec<Ticket> {
    let mut tickets: Vec<Ticket> = (1..=5)
        .map(|n| common::ticket_with_line(n, "Pantalla", None))
        .collect();
    tickets[1].tags = vec!["urgente".into()];
    tickets[3].tags = vec!["urgente".into()];
    tickets[4].stage = Some(Stage {
        name: "Entregado".into(),
        workflow_category: Some(WorkflowCategory::Final),
        stage_category: Some(StageCategory::Completed),
    });
    tickets
}

fn page_size(n: usize) -> PageSize {
    PageSize::new(n).unwrap()
}

#[test]
fn search_tickets_applies_view_filter_then_search_then_pagination() {
    let mut repo = MockRepository::new();
    repo.expect_list_tickets().times(1).returning(|| Ok(board()));
    let matcher = SearchMatcher::new(Locale::Spanish);

    let query = SearchQuery::new(page_size(2)).search("panta");
    let page = search_tickets(&repo, &matcher, query).unwrap();

    let numbers: Vec<u64> = page.results.items.iter().map(|t| t.number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(page.results.total, 4);
    assert_eq!(page.results.total_pages, 2);
    assert_eq!(page.search_query.as_deref(), Some("panta"));
}

#[test]
fn search_tickets_honours_tags_and_completed_toggle() {
    let mut repo = MockRepository::new();
    repo.expect_list_tickets().returning(|| Ok(board()));
    let matcher = SearchMatcher::new(Locale::Spanish);

    let urgent = SearchQuery::new(page_size(10)).view(TicketViewFilter {
        tags: vec!["urgente".into()],
        ..TicketViewFilter::default()
    });
    let page = search_tickets(&repo, &matcher, urgent).unwrap();
    let numbers: Vec<u64> = page.results.items.iter().map(|t| t.number).collect();
    assert_eq!(numbers, vec![2, 4]);

    let with_completed = SearchQuery::new(page_size(10))
        .view(TicketViewFilter {
            show_completed: true,
            ..TicketViewFilter::default()
        })
        .page(PageNumber::new(1).unwrap());
    let page = search_tickets(&repo, &matcher, with_completed).unwrap();
    assert_eq!(page.results.total, 5);
}

#[test]
fn search_from_form_defaults() {
    let mut repo = MockRepository::new();
    repo.expect_list_customers().returning(|| {
        Ok(vec![
            common::customer("José", "García López"),
            common::customer("Lucía", "Núñez"),
        ])
    });
    let matcher = SearchMatcher::new(Locale::Spanish);
    let form = SearchForm {
        search: Some("  NUÑEZ ".into()),
        page: Some(0),
        ..SearchForm::default()
    };

    let query = form.into_query(page_size(20)).unwrap();
    let page = search_customers(&repo, &matcher, query).unwrap();

    assert_eq!(page.results.total, 1);
    assert_eq!(page.results.page, 1);
    assert_eq!(page.results.items[0].first_name, "Lucía");
    assert_eq!(page.search_query.as_deref(), Some("NUÑEZ"));
}

#[test]
fn repository_errors_surface_as_service_errors() {
    let mut repo = MockRepository::new();
    repo.expect_list_tickets()
        .returning(|| Err(RepositoryError::NotFound("snapshot.json".into())));
    let matcher = SearchMatcher::new(Locale::Spanish);

    let result = search_tickets(&repo, &matcher, SearchQuery::new(page_size(20)));

    assert!(matches!(
        result,
        Err(ServiceError::Repository(RepositoryError::NotFound(_)))
    ));
}

#[test]
fn stats_are_computed_over_the_whole_board() {
    let mut repo = MockRepository::new();
    repo.expect_list_tickets().returning(|| Ok(board()));
    let now = DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc);

    let stats = ticket_stats(&repo, now).unwrap();

    assert_eq!(stats.total, 5);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.overdue, 0);
}
