use crm_search::repository::errors::RepositoryError;
use crm_search::repository::json::Snapshot;
use crm_search::repository::{CustomerReader, JsonRepository, TicketReader};

mod common;

#[test]
fn test_json_repository_round_trips_snapshot() {
    let snapshot = Snapshot {
        tickets: vec![
            common::jose_ticket(),
            common::ticket_with_line(7, "Pantalla", None),
        ],
        customers: vec![common::customer("Lucía", "Pérez Gil")],
    };
    let file = common::TestSnapshot::new(&snapshot);
    let repo = JsonRepository::new(file.path());

    let tickets = repo.list_tickets().unwrap();
    assert_eq!(tickets, snapshot.tickets);

    let customers = repo.list_customers().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].last_name, "Pérez Gil");
}

#[test]
fn test_missing_sections_default_to_empty() {
    let file = common::TestSnapshot::from_raw(r#"{ "customers": [] }"#);
    let repo = JsonRepository::new(file.path());

    assert!(repo.list_tickets().unwrap().is_empty());
}

#[test]
fn test_sparse_wire_records_are_accepted() {
    let file = common::TestSnapshot::from_raw(
        r#"{
            "tickets": [{
                "id": "7f3c1f2e-1d8a-4c55-9b7e-2a1d0c9e8f11",
                "contador": 9,
                "created_at": "2024-03-05 10:00:00+00",
                "cliente": null,
                "lineas": [{ "trabajo": { "nombre": "Pantalla" }, "producto": null }]
            }]
        }"#,
    );
    let repo = JsonRepository::new(file.path());

    let tickets = repo.list_tickets().unwrap();

    assert_eq!(tickets[0].number, 9);
    assert_eq!(tickets[0].customer, None);
    assert_eq!(tickets[0].due_date, None);
    assert_eq!(tickets[0].lines[0].product_name(), "");
}

#[test]
fn test_refreshed_file_is_picked_up() {
    let file = common::TestSnapshot::from_raw(r#"{ "customers": [] }"#);
    let repo = JsonRepository::new(file.path());
    assert!(repo.list_customers().unwrap().is_empty());

    let refreshed = serde_json::to_string(&Snapshot {
        customers: vec![common::customer("Ana", "Ruiz")],
        ..Snapshot::default()
    })
    .unwrap();
    std::fs::write(file.path(), refreshed).unwrap();

    assert_eq!(repo.list_customers().unwrap().len(), 1);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonRepository::new(dir.path().join("absent.json"));

    assert!(matches!(
        repo.list_tickets(),
        Err(RepositoryError::NotFound(_))
    ));
}

#[test]
fn test_malformed_snapshot_is_a_decoding_error() {
    let broken = common::TestSnapshot::from_raw(r#"{ "tickets": [ { "id": "#);
    let repo = JsonRepository::new(broken.path());
    assert!(matches!(
        repo.list_tickets(),
        Err(RepositoryError::Decoding(_))
    ));

    let wrong_shape = common::TestSnapshot::from_raw(r#"{ "tickets": [ { "contador": "x" } ] }"#);
    let repo = JsonRepository::new(wrong_shape.path());
    assert!(matches!(
        repo.list_tickets(),
        Err(RepositoryError::Decoding(_))
    ));
}
