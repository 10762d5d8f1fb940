//! Repository for the `assignments` table.
//!
//! Mutations run on the caller's open transaction connection; the overlap
//! guard relies on [`AssignmentRepo::lock_active_by_guest`] and
//! [`AssignmentRepo::lock_active_by_resource`] to acquire row locks on every
//! candidate before any conflict decision is made.

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use veranda_core::types::DbId;

use crate::models::assignment::{Assignment, AssignmentListQuery, ResourceKind};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, assignment_ref, resource_kind, guest_id, resource_id, \
    from_date, to_date, is_active, released_at, notes, created_at, updated_at";

/// Maximum page size for assignment listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for assignment listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides persistence for exclusive assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert a new active assignment.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        conn: &mut PgConnection,
        assignment_ref: &str,
        kind: ResourceKind,
        guest_id: DbId,
        resource_id: DbId,
        from_date: NaiveDate,
        to_date: Option<NaiveDate>,
        notes: Option<&str>,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assignments \
                (assignment_ref, resource_kind, guest_id, resource_id, from_date, to_date, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(assignment_ref)
            .bind(kind.as_str())
            .bind(guest_id)
            .bind(resource_id)
            .bind(from_date)
            .bind(to_date)
            .bind(notes)
            .fetch_one(conn)
            .await
    }

    /// Find an assignment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments WHERE id = $1");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an assignment by ID and lock the row for the caller's transaction.
    pub async fn find_by_id_locked(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Lock and return all active assignments of `kind` held by a guest,
    /// in stable id order, optionally excluding one record (self on update).
    pub async fn lock_active_by_guest(
        conn: &mut PgConnection,
        kind: ResourceKind,
        guest_id: DbId,
        exclude_id: Option<DbId>,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assignments \
             WHERE resource_kind = $1 AND guest_id = $2 AND is_active = true \
               AND ($3::BIGINT IS NULL OR id <> $3) \
             ORDER BY id \
             FOR UPDATE"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(kind.as_str())
            .bind(guest_id)
            .bind(exclude_id)
            .fetch_all(conn)
            .await
    }

    /// Lock and return all active assignments of `kind` on a resource,
    /// in stable id order, optionally excluding one record (self on update).
    pub async fn lock_active_by_resource(
        conn: &mut PgConnection,
        kind: ResourceKind,
        resource_id: DbId,
        exclude_id: Option<DbId>,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assignments \
             WHERE resource_kind = $1 AND resource_id = $2 AND is_active = true \
               AND ($3::BIGINT IS NULL OR id <> $3) \
             ORDER BY id \
             FOR UPDATE"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(kind.as_str())
            .bind(resource_id)
            .bind(exclude_id)
            .fetch_all(conn)
            .await
    }

    /// Apply new interval bounds and notes to a locked assignment.
    pub async fn update_fields(
        conn: &mut PgConnection,
        id: DbId,
        from_date: NaiveDate,
        to_date: Option<NaiveDate>,
        notes: Option<&str>,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "UPDATE assignments SET \
                from_date = $2, to_date = $3, notes = COALESCE($4, notes) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .bind(from_date)
            .bind(to_date)
            .bind(notes)
            .fetch_one(conn)
            .await
    }

    /// Deactivate an assignment, stamping `released_at`. The row is kept
    /// as history and no longer participates in overlap checks.
    pub async fn release(conn: &mut PgConnection, id: DbId) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "UPDATE assignments SET is_active = false, released_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_one(conn)
            .await
    }

    /// Lock a master-data row (guest or resource table) for the caller's
    /// transaction. Returns `false` when the row is missing or soft-deleted.
    ///
    /// `table` is always a [`ResourceKind::master_table`] constant or
    /// `"guests"`, never caller input.
    pub async fn lock_master_row(
        conn: &mut PgConnection,
        table: &'static str,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query =
            format!("SELECT id FROM {table} WHERE id = $1 AND deleted_at IS NULL FOR UPDATE");
        let row: Option<(DbId,)> = sqlx::query_as(&query).bind(id).fetch_optional(conn).await?;
        Ok(row.is_some())
    }

    /// List assignments with optional filters and pagination.
    pub async fn list(
        pool: &PgPool,
        params: &AssignmentListQuery,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0);

        // Build the WHERE clause and track the next bind parameter index.
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx: u32 = 1;

        if params.resource_kind.is_some() {
            conditions.push(format!("resource_kind = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.guest_id.is_some() {
            conditions.push(format!("guest_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.resource_id.is_some() {
            conditions.push(format!("resource_id = ${bind_idx}"));
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
            "SELECT {COLUMNS} FROM assignments \
             {where_clause} \
             ORDER BY from_date DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Assignment>(&query);
        if let Some(kind) = params.resource_kind {
            q = q.bind(kind.as_str());
        }
        if let Some(guest_id) = params.guest_id {
            q = q.bind(guest_id);
        }
        if let Some(resource_id) = params.resource_id {
            q = q.bind(resource_id);
        }
        if let Some(active) = params.active {
            q = q.bind(active);
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }
}
