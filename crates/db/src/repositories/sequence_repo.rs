//! Sequence allocation for human-readable references.
//!
//! Backed by native PostgreSQL sequences, one per namespace. `nextval` is
//! non-transactional: a rolled-back transaction leaves a gap, never a
//! duplicate, which is exactly the allocator contract. Never implemented
//! as "read max + 1".

use sqlx::PgConnection;
use veranda_core::refs::{format_reference, SequenceNamespace};

/// Allocates monotonically increasing numbers per namespace.
pub struct SequenceRepo;

impl SequenceRepo {
    /// Draw the next number from the namespace's sequence.
    pub async fn next(
        conn: &mut PgConnection,
        namespace: SequenceNamespace,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT nextval($1::regclass)")
            .bind(namespace.sequence_name())
            .fetch_one(conn)
            .await
    }

    /// Allocate and format a reference (e.g. `GV-000042`) in one step.
    pub async fn next_reference(
        conn: &mut PgConnection,
        namespace: SequenceNamespace,
    ) -> Result<String, sqlx::Error> {
        let number = Self::next(conn, namespace).await?;
        Ok(format_reference(namespace, number))
    }
}
