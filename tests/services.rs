//! End-to-end checks of the service layer against a real SQLite database.

use consultant_agenda::forms::appointment::{
    CreateAppointmentForm, SearchAppointmentsParams, UpdateAppointmentForm,
};
use consultant_agenda::forms::consultant::{CreateConsultantForm, UpdateConsultantForm};
use consultant_agenda::repository::{AppointmentReader, ConsultantReader, DieselRepository};
use consultant_agenda::services::appointment as appointment_service;
use consultant_agenda::services::consultant as consultant_service;
use consultant_agenda::services::ServiceError;

mod common;

fn create_consultant(repo: &DieselRepository, name: &str, rate: f64) -> i32 {
    consultant_service::create_consultant(
        repo,
        CreateConsultantForm {
            name: name.to_string(),
            hourly_rate: Some(rate),
        },
    )
    .unwrap()
    .id
}

fn appointment_form(consultant_id: i32, start_time: &str, end_time: &str) -> CreateAppointmentForm {
    CreateAppointmentForm {
        consultant_id,
        start_date: "2024-12-04".to_string(),
        end_date: "2024-12-05".to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        break_duration: "00:30".to_string(),
    }
}

fn search_all(page: Option<i64>) -> SearchAppointmentsParams {
    SearchAppointmentsParams {
        start_date: None,
        end_date: None,
        consultant_id: None,
        page,
    }
}

#[test]
fn test_billing_regression_fixture() {
    let test_db = common::TestDb::new("test_billing_regression_fixture.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let ana = create_consultant(&repo, "Ana", 37.5);
    appointment_service::create_appointment(&repo, appointment_form(ana, "20:44", "23:44"))
        .unwrap();

    let statement = appointment_service::search_appointments(&repo, search_all(None)).unwrap();
    assert_eq!(statement.entries.len(), 1);
    assert_eq!(statement.entries[0].worked_duration, "03:00");
    assert_eq!(statement.entries[0].billed_amount, 112.5);
    assert_eq!(statement.total_billed, 112.5);
}

#[test]
fn test_search_filters_and_error_ordering() {
    let test_db = common::TestDb::new("test_search_filters_and_error_ordering.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let ana = create_consultant(&repo, "Ana", 37.5);
    let bruno = create_consultant(&repo, "Bruno", 20.0);
    appointment_service::create_appointment(&repo, appointment_form(ana, "08:00", "12:00"))
        .unwrap();
    appointment_service::create_appointment(&repo, appointment_form(bruno, "08:00", "12:00"))
        .unwrap();

    let params = SearchAppointmentsParams {
        start_date: None,
        end_date: None,
        consultant_id: Some(bruno),
        page: None,
    };
    let statement = appointment_service::search_appointments(&repo, params).unwrap();
    assert_eq!(statement.entries.len(), 1);
    assert_eq!(statement.entries[0].appointment.consultant_id, bruno);

    assert!(matches!(
        appointment_service::search_appointments(&repo, search_all(Some(0))),
        Err(ServiceError::InvalidPage)
    ));
    assert!(matches!(
        appointment_service::search_appointments(
            &repo,
            SearchAppointmentsParams {
                start_date: None,
                end_date: None,
                consultant_id: Some(9999),
                page: None,
            }
        ),
        Err(ServiceError::ConsultantNotFound)
    ));
}

#[test]
fn test_search_pages_are_disjoint_and_capped() {
    let test_db = common::TestDb::new("test_search_pages_are_disjoint_and_capped.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let ana = create_consultant(&repo, "Ana", 10.0);
    for _ in 0..13 {
        appointment_service::create_appointment(&repo, appointment_form(ana, "08:00", "09:00"))
            .unwrap();
    }

    let page1 = appointment_service::search_appointments(&repo, search_all(Some(1))).unwrap();
    let page2 = appointment_service::search_appointments(&repo, search_all(Some(2))).unwrap();

    assert_eq!(page1.entries.len(), 10);
    assert_eq!(page2.entries.len(), 3);
    assert!(page1.entries.iter().all(|a| {
        page2
            .entries
            .iter()
            .all(|b| a.appointment.id != b.appointment.id)
    }));

    // Each page sums only its own entries: 1h at 10.0/hour per appointment.
    assert_eq!(page1.total_billed, 100.0);
    assert_eq!(page2.total_billed, 30.0);
}

#[test]
fn test_create_appointment_with_missing_consultant_persists_nothing() {
    let test_db = common::TestDb::new("test_create_appointment_missing_consultant.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    assert!(matches!(
        appointment_service::create_appointment(&repo, appointment_form(9999, "08:00", "12:00")),
        Err(ServiceError::ConsultantNotFound)
    ));

    let statement = appointment_service::search_appointments(&repo, search_all(None)).unwrap();
    assert!(statement.entries.is_empty());
}

#[test]
fn test_partial_update_leaves_absent_fields_untouched() {
    let test_db = common::TestDb::new("test_partial_update_leaves_absent_fields.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let ana = create_consultant(&repo, "Ana", 37.5);

    // Consultant: updating only the name leaves the rate alone.
    let updated = consultant_service::update_consultant(
        &repo,
        UpdateConsultantForm {
            id: ana,
            name: Some("Ana Clara".to_string()),
            hourly_rate: None,
        },
    )
    .unwrap();
    assert_eq!(updated.name, "Ana Clara");
    assert_eq!(updated.hourly_rate, 37.5);

    // Appointment: updating only the end time leaves everything else alone.
    let appointment =
        appointment_service::create_appointment(&repo, appointment_form(ana, "08:00", "12:00"))
            .unwrap();
    let form: UpdateAppointmentForm = serde_json::from_value(serde_json::json!({
        "id": appointment.id,
        "endTime": "14:00",
    }))
    .unwrap();
    let updated = appointment_service::update_appointment(&repo, form).unwrap();
    assert_eq!(updated.end_time.to_string(), "14:00:00");
    assert_eq!(updated.start_time, appointment.start_time);
    assert_eq!(updated.start_date, appointment.start_date);
    assert_eq!(updated.break_duration, appointment.break_duration);
}

#[test]
fn test_update_appointment_rejects_missing_consultant_without_writing() {
    let test_db = common::TestDb::new("test_update_appointment_rejects_missing.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let ana = create_consultant(&repo, "Ana", 37.5);
    let appointment =
        appointment_service::create_appointment(&repo, appointment_form(ana, "08:00", "12:00"))
            .unwrap();

    let form: UpdateAppointmentForm = serde_json::from_value(serde_json::json!({
        "id": appointment.id,
        "consultantId": 9999,
        "endTime": "14:00",
    }))
    .unwrap();
    assert!(matches!(
        appointment_service::update_appointment(&repo, form),
        Err(ServiceError::ConsultantNotFound)
    ));

    // The rejected update left every field untouched.
    let unchanged = repo
        .get_appointment_by_id(appointment.id)
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.consultant_id, ana);
    assert_eq!(unchanged.end_time, appointment.end_time);
}

#[test]
fn test_consultant_delete_blocked_by_dependents() {
    let test_db = common::TestDb::new("test_consultant_delete_blocked.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let ana = create_consultant(&repo, "Ana", 37.5);
    let appointment =
        appointment_service::create_appointment(&repo, appointment_form(ana, "08:00", "12:00"))
            .unwrap();

    assert!(matches!(
        consultant_service::delete_consultant(&repo, ana),
        Err(ServiceError::HasDependents)
    ));
    assert!(repo.get_consultant_by_id(ana).unwrap().is_some());

    // Removing the appointment unblocks the delete.
    appointment_service::delete_appointment(&repo, appointment.id).unwrap();
    consultant_service::delete_consultant(&repo, ana).unwrap();
    assert!(repo.get_consultant_by_id(ana).unwrap().is_none());
}

#[test]
fn test_deletes_are_idempotent() {
    let test_db = common::TestDb::new("test_deletes_are_idempotent.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    assert!(appointment_service::delete_appointment(&repo, 424242).is_ok());
    assert!(consultant_service::delete_consultant(&repo, 424242).is_ok());
}

#[test]
fn test_round_trip_returns_canonical_formats() {
    let test_db = common::TestDb::new("test_round_trip_canonical_formats.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let ana = create_consultant(&repo, "Ana", 37.5);

    // Seconds on input are truncated to whole minutes on the way in.
    let form = CreateAppointmentForm {
        consultant_id: ana,
        start_date: "2024-12-04".to_string(),
        end_date: "2024-12-05".to_string(),
        start_time: "20:44:00".to_string(),
        end_time: "23:44".to_string(),
        break_duration: "00:30".to_string(),
    };
    let created = appointment_service::create_appointment(&repo, form).unwrap();

    let fetched = repo.get_appointment_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    let wire = serde_json::to_value(&fetched).unwrap();
    assert_eq!(wire["startDate"], "2024-12-04");
    assert_eq!(wire["endDate"], "2024-12-05");
    assert_eq!(wire["startTime"], "20:44");
    assert_eq!(wire["endTime"], "23:44");
    assert_eq!(wire["breakDuration"], "00:30");
    assert_eq!(wire["consultantId"], ana);
}
