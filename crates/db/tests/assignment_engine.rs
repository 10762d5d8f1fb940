//! Integration tests for the exclusive assignment engine.
//!
//! Covers the per-kind exclusivity axes, closed-interval overlap
//! semantics, open-ended assignments, release/reassign flows, and
//! reference allocation.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use sqlx::PgPool;
use veranda_core::error::CoreError;
use veranda_core::refs::SequenceNamespace;
use veranda_db::models::assignment::{CreateAssignment, Reassign, ResourceKind, UpdateAssignment};
use veranda_db::models::escort_officer::CreateEscortOfficer;
use veranda_db::models::guest::CreateGuest;
use veranda_db::models::medical_contact::CreateMedicalContact;
use veranda_db::models::room::CreateRoom;
use veranda_db::models::vehicle::CreateVehicle;
use veranda_db::repositories::{
    AssignmentRepo, EscortOfficerRepo, GuestRepo, MedicalContactRepo, RoomRepo, SequenceRepo,
    VehicleRepo,
};
use veranda_db::services::AssignmentService;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn svc(pool: &PgPool) -> AssignmentService {
    AssignmentService::new(pool.clone(), 5_000)
}

async fn new_guest(pool: &PgPool, name: &str) -> i64 {
    GuestRepo::create(
        pool,
        &CreateGuest {
            full_name: name.to_string(),
            title: None,
            organization: None,
            country: None,
            phone: None,
            dietary_notes: None,
            notes: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn new_officer(pool: &PgPool, name: &str) -> i64 {
    EscortOfficerRepo::create(
        pool,
        &CreateEscortOfficer {
            full_name: name.to_string(),
            rank: None,
            unit: None,
            phone: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn new_medical_contact(pool: &PgPool, name: &str) -> i64 {
    MedicalContactRepo::create(
        pool,
        &CreateMedicalContact {
            full_name: name.to_string(),
            clinic: None,
            specialty: None,
            phone: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn new_vehicle(pool: &PgPool, plate: &str) -> i64 {
    VehicleRepo::create(
        pool,
        &CreateVehicle {
            plate_number: plate.to_string(),
            make_model: None,
            seats: 4,
            driver_id: None,
        },
    )
    .await
    .unwrap()
    .id
}

fn assignment(
    kind: ResourceKind,
    guest_id: i64,
    resource_id: i64,
    from: &str,
    to: Option<&str>,
) -> CreateAssignment {
    CreateAssignment {
        resource_kind: kind,
        guest_id,
        resource_id,
        from_date: d(from),
        to_date: to.map(d),
        notes: None,
    }
}

// ---------------------------------------------------------------------------
// Test: creation and reference allocation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_allocates_prefixed_references(pool: PgPool) {
    let guest = new_guest(&pool, "Guest A").await;
    let officer = new_officer(&pool, "Officer K").await;
    let vehicle = new_vehicle(&pool, "GH-0001-25").await;
    let svc = svc(&pool);

    let first = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            guest,
            officer,
            "2025-04-01",
            Some("2025-04-10"),
        ))
        .await
        .unwrap();
    assert_eq!(first.assignment_ref, "OA-000001");
    assert!(first.is_active);
    assert!(first.released_at.is_none());

    // Each kind draws from its own sequence.
    let second = svc
        .create(&assignment(
            ResourceKind::Vehicle,
            guest,
            vehicle,
            "2025-04-01",
            Some("2025-04-10"),
        ))
        .await
        .unwrap();
    assert_eq!(second.assignment_ref, "VA-000001");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_interval_rejected(pool: PgPool) {
    let guest = new_guest(&pool, "Guest B").await;
    let officer = new_officer(&pool, "Officer L").await;

    let err = svc(&pool)
        .create(&assignment(
            ResourceKind::EscortOfficer,
            guest,
            officer,
            "2025-04-10",
            Some("2025-04-01"),
        ))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::InvalidInterval(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_parties_not_found(pool: PgPool) {
    let guest = new_guest(&pool, "Guest C").await;
    let officer = new_officer(&pool, "Officer M").await;
    let svc = svc(&pool);

    let err = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            999_999,
            officer,
            "2025-04-01",
            None,
        ))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "Guest", .. });

    let err = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            guest,
            999_999,
            "2025-04-01",
            None,
        ))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "EscortOfficer", .. });
}

// ---------------------------------------------------------------------------
// Test: exclusivity axes per resource kind
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_officer_cannot_serve_two_guests_at_once(pool: PgPool) {
    let g1 = new_guest(&pool, "Guest D1").await;
    let g2 = new_guest(&pool, "Guest D2").await;
    let officer = new_officer(&pool, "Officer N").await;
    let svc = svc(&pool);

    let existing = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            g1,
            officer,
            "2025-04-10",
            Some("2025-04-20"),
        ))
        .await
        .unwrap();

    let err = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            g2,
            officer,
            "2025-04-15",
            Some("2025-04-25"),
        ))
        .await
        .unwrap_err();
    // The conflict names the blocking assignment.
    assert_matches!(err, CoreError::Conflict(msg) if msg.contains(&existing.assignment_ref));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_guest_cannot_hold_two_officers_at_once(pool: PgPool) {
    let guest = new_guest(&pool, "Guest E").await;
    let o1 = new_officer(&pool, "Officer P1").await;
    let o2 = new_officer(&pool, "Officer P2").await;
    let svc = svc(&pool);

    svc.create(&assignment(
        ResourceKind::EscortOfficer,
        guest,
        o1,
        "2025-04-10",
        Some("2025-04-20"),
    ))
    .await
    .unwrap();

    let err = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            guest,
            o2,
            "2025-04-18",
            Some("2025-04-22"),
        ))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Conflict(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_medical_contact_is_shared_across_guests(pool: PgPool) {
    let g1 = new_guest(&pool, "Guest F1").await;
    let g2 = new_guest(&pool, "Guest F2").await;
    let doctor = new_medical_contact(&pool, "Dr. Mensah").await;
    let svc = svc(&pool);

    // Same doctor, overlapping dates, different guests: allowed.
    svc.create(&assignment(
        ResourceKind::MedicalContact,
        g1,
        doctor,
        "2025-04-10",
        Some("2025-04-20"),
    ))
    .await
    .unwrap();
    svc.create(&assignment(
        ResourceKind::MedicalContact,
        g2,
        doctor,
        "2025-04-12",
        Some("2025-04-18"),
    ))
    .await
    .unwrap();

    // But one guest cannot hold two overlapping medical contacts.
    let other_doctor = new_medical_contact(&pool, "Dr. Owusu").await;
    let err = svc
        .create(&assignment(
            ResourceKind::MedicalContact,
            g1,
            other_doctor,
            "2025-04-15",
            Some("2025-04-16"),
        ))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Conflict(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_vehicle_guards_resource_axis_only(pool: PgPool) {
    let g1 = new_guest(&pool, "Guest G1").await;
    let g2 = new_guest(&pool, "Guest G2").await;
    let v1 = new_vehicle(&pool, "GH-1111-25").await;
    let v2 = new_vehicle(&pool, "GH-2222-25").await;
    let svc = svc(&pool);

    svc.create(&assignment(
        ResourceKind::Vehicle,
        g1,
        v1,
        "2025-04-10",
        Some("2025-04-20"),
    ))
    .await
    .unwrap();

    // A delegation's guest may hold several vehicles at once.
    svc.create(&assignment(
        ResourceKind::Vehicle,
        g1,
        v2,
        "2025-04-10",
        Some("2025-04-20"),
    ))
    .await
    .unwrap();

    // But a vehicle serves one guest at a time.
    let err = svc
        .create(&assignment(
            ResourceKind::Vehicle,
            g2,
            v1,
            "2025-04-15",
            None,
        ))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Conflict(_));
}

// ---------------------------------------------------------------------------
// Test: interval semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_adjacent_intervals_do_not_conflict(pool: PgPool) {
    let g1 = new_guest(&pool, "Guest H1").await;
    let g2 = new_guest(&pool, "Guest H2").await;
    let officer = new_officer(&pool, "Officer Q").await;
    let svc = svc(&pool);

    svc.create(&assignment(
        ResourceKind::EscortOfficer,
        g1,
        officer,
        "2025-04-01",
        Some("2025-04-14"),
    ))
    .await
    .unwrap();

    // Dates are inclusive: starting the day after the previous end is fine...
    svc.create(&assignment(
        ResourceKind::EscortOfficer,
        g2,
        officer,
        "2025-04-15",
        Some("2025-04-20"),
    ))
    .await
    .unwrap();

    // ...but sharing the boundary day is not.
    let g3 = new_guest(&pool, "Guest H3").await;
    let err = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            g3,
            officer,
            "2025-04-20",
            Some("2025-04-30"),
        ))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Conflict(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_open_ended_assignment_blocks_all_later_dates(pool: PgPool) {
    let g1 = new_guest(&pool, "Guest I1").await;
    let g2 = new_guest(&pool, "Guest I2").await;
    let officer = new_officer(&pool, "Officer R").await;
    let svc = svc(&pool);

    svc.create(&assignment(
        ResourceKind::EscortOfficer,
        g1,
        officer,
        "2025-04-01",
        None,
    ))
    .await
    .unwrap();

    let err = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            g2,
            officer,
            "2026-01-01",
            Some("2026-01-10"),
        ))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Conflict(_));

    // A window that ends before the open-ended one begins is fine.
    svc.create(&assignment(
        ResourceKind::EscortOfficer,
        g2,
        officer,
        "2025-03-01",
        Some("2025-03-31"),
    ))
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Test: updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_excludes_itself_from_overlap_check(pool: PgPool) {
    let guest = new_guest(&pool, "Guest J").await;
    let officer = new_officer(&pool, "Officer S").await;
    let svc = svc(&pool);

    let created = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            guest,
            officer,
            "2025-04-01",
            Some("2025-04-10"),
        ))
        .await
        .unwrap();

    // Extending the window overlaps the record's own old interval only.
    let updated = svc
        .update(
            created.id,
            &UpdateAssignment {
                from_date: None,
                to_date: Some(d("2025-04-20")),
                clear_to_date: None,
                notes: Some("extended stay".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.to_date, Some(d("2025-04-20")));
    assert_eq!(updated.notes.as_deref(), Some("extended stay"));

    // clear_to_date makes the assignment open-ended.
    let opened = svc
        .update(
            created.id,
            &UpdateAssignment {
                from_date: None,
                to_date: None,
                clear_to_date: Some(true),
                notes: None,
            },
        )
        .await
        .unwrap();
    assert!(opened.to_date.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_into_conflict_rejected(pool: PgPool) {
    let g1 = new_guest(&pool, "Guest K1").await;
    let g2 = new_guest(&pool, "Guest K2").await;
    let officer = new_officer(&pool, "Officer T").await;
    let svc = svc(&pool);

    svc.create(&assignment(
        ResourceKind::EscortOfficer,
        g1,
        officer,
        "2025-04-01",
        Some("2025-04-10"),
    ))
    .await
    .unwrap();
    let second = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            g2,
            officer,
            "2025-04-11",
            Some("2025-04-20"),
        ))
        .await
        .unwrap();

    let err = svc
        .update(
            second.id,
            &UpdateAssignment {
                from_date: Some(d("2025-04-05")),
                to_date: None,
                clear_to_date: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Conflict(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_released_assignment_is_immutable(pool: PgPool) {
    let guest = new_guest(&pool, "Guest L").await;
    let officer = new_officer(&pool, "Officer U").await;
    let svc = svc(&pool);

    let created = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            guest,
            officer,
            "2025-04-01",
            Some("2025-04-10"),
        ))
        .await
        .unwrap();
    svc.release(created.id).await.unwrap();

    let err = svc
        .update(
            created.id,
            &UpdateAssignment {
                from_date: None,
                to_date: Some(d("2025-04-15")),
                clear_to_date: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::InvalidTransition(_));
}

// ---------------------------------------------------------------------------
// Test: release
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_release_frees_the_slot(pool: PgPool) {
    let g1 = new_guest(&pool, "Guest M1").await;
    let g2 = new_guest(&pool, "Guest M2").await;
    let officer = new_officer(&pool, "Officer V").await;
    let svc = svc(&pool);

    let first = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            g1,
            officer,
            "2025-04-01",
            None,
        ))
        .await
        .unwrap();

    // Blocked while the first assignment is active.
    let retry = assignment(ResourceKind::EscortOfficer, g2, officer, "2025-04-05", None);
    assert_matches!(svc.create(&retry).await.unwrap_err(), CoreError::Conflict(_));

    let released = svc.release(first.id).await.unwrap();
    assert!(!released.is_active);
    assert!(released.released_at.is_some());

    // Released assignments are invisible to the guard.
    svc.create(&retry).await.unwrap();

    // Releasing again is a no-op that reports the same state.
    let again = svc.release(first.id).await.unwrap();
    assert!(!again.is_active);
    assert_eq!(again.released_at, released.released_at);
}

// ---------------------------------------------------------------------------
// Test: reassign
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reassign_swaps_resources_atomically(pool: PgPool) {
    let guest = new_guest(&pool, "Guest N").await;
    let o1 = new_officer(&pool, "Officer W1").await;
    let o2 = new_officer(&pool, "Officer W2").await;
    let svc = svc(&pool);

    let original = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            guest,
            o1,
            "2025-04-01",
            None,
        ))
        .await
        .unwrap();

    let replacement = svc
        .reassign(
            original.id,
            &Reassign {
                guest_id: None,
                resource_id: Some(o2),
                from_date: d("2025-04-05"),
                to_date: None,
                notes: Some("officer rotation".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(replacement.resource_id, o2);
    assert_eq!(replacement.guest_id, guest);
    assert_ne!(replacement.assignment_ref, original.assignment_ref);

    let old = AssignmentRepo::find_by_id(&pool, original.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!old.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_reassign_leaves_original_active(pool: PgPool) {
    let g1 = new_guest(&pool, "Guest O1").await;
    let g2 = new_guest(&pool, "Guest O2").await;
    let o1 = new_officer(&pool, "Officer X1").await;
    let o2 = new_officer(&pool, "Officer X2").await;
    let svc = svc(&pool);

    let original = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            g1,
            o1,
            "2025-04-01",
            None,
        ))
        .await
        .unwrap();
    // The target officer is already taken by another guest.
    svc.create(&assignment(
        ResourceKind::EscortOfficer,
        g2,
        o2,
        "2025-04-01",
        None,
    ))
    .await
    .unwrap();

    let err = svc
        .reassign(
            original.id,
            &Reassign {
                guest_id: None,
                resource_id: Some(o2),
                from_date: d("2025-04-05"),
                to_date: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Conflict(_));

    // The release inside the failed transaction rolled back.
    let old = AssignmentRepo::find_by_id(&pool, original.id)
        .await
        .unwrap()
        .unwrap();
    assert!(old.is_active);
    assert!(old.released_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reassign_same_resource_adjusts_window(pool: PgPool) {
    let guest = new_guest(&pool, "Guest P").await;
    let officer = new_officer(&pool, "Officer Y").await;
    let svc = svc(&pool);

    let original = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            guest,
            officer,
            "2025-04-01",
            Some("2025-04-10"),
        ))
        .await
        .unwrap();

    // Reassigning onto the same officer works because the old record is
    // released before the guard runs.
    let replacement = svc
        .reassign(
            original.id,
            &Reassign {
                guest_id: None,
                resource_id: None,
                from_date: d("2025-04-03"),
                to_date: Some(d("2025-04-12")),
                notes: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(replacement.resource_id, officer);
    assert_eq!(replacement.from_date, d("2025-04-03"));
}

// ---------------------------------------------------------------------------
// Test: room exclusivity (resource axis only)
// ---------------------------------------------------------------------------

async fn new_room(pool: &PgPool, number: &str) -> i64 {
    RoomRepo::create(
        pool,
        &CreateRoom {
            room_number: number.to_string(),
            floor: 1,
            capacity: 2,
            notes: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_room_exclusive_per_resource_only(pool: PgPool) {
    let g1 = new_guest(&pool, "Guest Q").await;
    let g2 = new_guest(&pool, "Guest R").await;
    let r1 = new_room(&pool, "101").await;
    let r2 = new_room(&pool, "102").await;
    let svc = svc(&pool);

    let first = svc
        .create(&assignment(
            ResourceKind::Room,
            g1,
            r1,
            "2025-05-01",
            Some("2025-05-10"),
        ))
        .await
        .unwrap();
    assert_eq!(first.assignment_ref, "RA-000001");

    // Same room, different guest, overlapping window: blocked.
    let err = svc
        .create(&assignment(
            ResourceKind::Room,
            g2,
            r1,
            "2025-05-05",
            Some("2025-05-15"),
        ))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Conflict(ref msg) if msg.contains("RA-000001"));

    // One guest holding two rooms at once is fine (suite plus spillover).
    svc.create(&assignment(
        ResourceKind::Room,
        g1,
        r2,
        "2025-05-01",
        Some("2025-05-10"),
    ))
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Test: sequence allocator
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sequence_rollback_leaves_gap_never_duplicate(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let first = SequenceRepo::next(&mut conn, SequenceNamespace::GuestVisit)
        .await
        .unwrap();
    drop(conn);

    // Draw inside a transaction that rolls back.
    let mut tx = pool.begin().await.unwrap();
    let rolled_back = SequenceRepo::next(&mut tx, SequenceNamespace::GuestVisit)
        .await
        .unwrap();
    assert_eq!(rolled_back, first + 1);
    tx.rollback().await.unwrap();

    // The rolled-back draw is never handed out again.
    let mut conn = pool.acquire().await.unwrap();
    let next = SequenceRepo::next(&mut conn, SequenceNamespace::GuestVisit)
        .await
        .unwrap();
    assert!(next > rolled_back);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sequence_namespaces_are_independent(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let visit = SequenceRepo::next_reference(&mut conn, SequenceNamespace::GuestVisit)
        .await
        .unwrap();
    let officer = SequenceRepo::next_reference(&mut conn, SequenceNamespace::OfficerAssignment)
        .await
        .unwrap();
    assert_eq!(visit, "GV-000001");
    assert_eq!(officer, "OA-000001");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reassign_validates_parties_before_releasing(pool: PgPool) {
    let guest = new_guest(&pool, "Guest S").await;
    let officer = new_officer(&pool, "Officer Z").await;
    let svc = svc(&pool);

    let original = svc
        .create(&assignment(
            ResourceKind::EscortOfficer,
            guest,
            officer,
            "2025-06-01",
            None,
        ))
        .await
        .unwrap();

    // The target resource does not exist: the master lookup fails before
    // the old record is touched, so it stays active.
    let err = svc
        .reassign(
            original.id,
            &Reassign {
                guest_id: None,
                resource_id: Some(officer + 999),
                from_date: d("2025-06-05"),
                to_date: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "EscortOfficer", .. });

    let old = AssignmentRepo::find_by_id(&pool, original.id)
        .await
        .unwrap()
        .unwrap();
    assert!(old.is_active);
    assert!(old.released_at.is_none());

    // An unknown assignment id fails before any lock is taken.
    let err = svc
        .reassign(
            original.id + 999,
            &Reassign {
                guest_id: None,
                resource_id: None,
                from_date: d("2025-06-05"),
                to_date: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "Assignment", .. });
}
