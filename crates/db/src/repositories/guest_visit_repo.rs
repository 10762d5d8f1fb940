//! Repository for the `guest_visits` table.
//!
//! Inserts and updates take the caller's open transaction connection plus
//! the resolution the presence machine produced — the repo persists what
//! the machine decided and never recomputes status itself.

use sqlx::{PgConnection, PgPool};
use veranda_core::presence::PresenceResolution;
use veranda_core::types::DbId;

use crate::models::guest_visit::{GuestVisit, RecordPresence, VisitListQuery};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, visit_ref, guest_id, entry_date, entry_time, \
    exit_date, exit_time, status, is_active, recorded_by, updated_by, \
    created_at, updated_at";

/// Maximum page size for visit listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for visit listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides persistence for guest visits (presence records).
pub struct GuestVisitRepo;

impl GuestVisitRepo {
    /// Find a visit by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GuestVisit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guest_visits WHERE id = $1");
        sqlx::query_as::<_, GuestVisit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the guest's open (active) visit and lock it for the caller's
    /// transaction. At most one exists per guest (partial unique index).
    pub async fn find_active_for_guest_locked(
        conn: &mut PgConnection,
        guest_id: DbId,
    ) -> Result<Option<GuestVisit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM guest_visits \
             WHERE guest_id = $1 AND is_active = true \
             FOR UPDATE"
        );
        sqlx::query_as::<_, GuestVisit>(&query)
            .bind(guest_id)
            .fetch_optional(conn)
            .await
    }

    /// Insert a new visit row from the recorded input and its resolution.
    pub async fn insert(
        conn: &mut PgConnection,
        guest_id: DbId,
        visit_ref: &str,
        input: &RecordPresence,
        resolution: &PresenceResolution,
    ) -> Result<GuestVisit, sqlx::Error> {
        let query = format!(
            "INSERT INTO guest_visits \
                (visit_ref, guest_id, entry_date, entry_time, exit_date, exit_time, \
                 status, is_active, recorded_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GuestVisit>(&query)
            .bind(visit_ref)
            .bind(guest_id)
            .bind(input.entry_date)
            .bind(input.entry_time)
            .bind(resolution.exit_date)
            .bind(resolution.exit_time)
            .bind(resolution.status.as_str())
            .bind(resolution.is_active)
            .bind(&input.recorded_by)
            .fetch_one(conn)
            .await
    }

    /// Overwrite an existing visit row with the latest input and resolution.
    pub async fn apply_resolution(
        conn: &mut PgConnection,
        id: DbId,
        input: &RecordPresence,
        resolution: &PresenceResolution,
    ) -> Result<GuestVisit, sqlx::Error> {
        let query = format!(
            "UPDATE guest_visits SET \
                entry_date = $2, entry_time = $3, exit_date = $4, exit_time = $5, \
                status = $6, is_active = $7, updated_by = $8 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GuestVisit>(&query)
            .bind(id)
            .bind(input.entry_date)
            .bind(input.entry_time)
            .bind(resolution.exit_date)
            .bind(resolution.exit_time)
            .bind(resolution.status.as_str())
            .bind(resolution.is_active)
            .bind(&input.recorded_by)
            .fetch_one(conn)
            .await
    }

    /// List all visits for a guest, most recent entry first.
    pub async fn list_by_guest(
        pool: &PgPool,
        guest_id: DbId,
    ) -> Result<Vec<GuestVisit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM guest_visits \
             WHERE guest_id = $1 \
             ORDER BY entry_date DESC, id DESC"
        );
        sqlx::query_as::<_, GuestVisit>(&query)
            .bind(guest_id)
            .fetch_all(pool)
            .await
    }

    /// List visits with optional guest/active filters and pagination.
    pub async fn list(
        pool: &PgPool,
        params: &VisitListQuery,
    ) -> Result<Vec<GuestVisit>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0);

        // Build the WHERE clause and track the next bind parameter index.
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx: u32 = 1;

        if params.guest_id.is_some() {
            conditions.push(format!("guest_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.active.is_some() {
            conditions.push(format!("is_active = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM guest_visits \
             {where_clause} \
             ORDER BY entry_date DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, GuestVisit>(&query);
        if let Some(guest_id) = params.guest_id {
            q = q.bind(guest_id);
        }
        if let Some(active) = params.active {
            q = q.bind(active);
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }
}
