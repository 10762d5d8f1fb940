//! Engine transaction helpers.
//!
//! Every engine operation (presence recording, assignment mutation) runs in
//! one transaction opened here, with a lock timeout applied so contention
//! surfaces as a classifiable `Busy` error instead of an unbounded wait.

use sqlx::{PgPool, Postgres, Transaction};
use veranda_core::error::CoreError;

/// SQLSTATEs that mean "lock contention, retry with fresh input":
/// lock_not_available, serialization_failure, deadlock_detected.
const CONTENTION_SQLSTATES: [&str; 3] = ["55P03", "40001", "40P01"];

/// Begin an engine transaction with `lock_timeout` applied.
pub async fn begin_engine_tx(
    pool: &PgPool,
    lock_timeout_ms: u64,
) -> Result<Transaction<'static, Postgres>, CoreError> {
    let mut tx = pool.begin().await.map_err(classify_db_error)?;
    // SET does not take bind parameters.
    sqlx::query(&format!("SET LOCAL lock_timeout = '{lock_timeout_ms}ms'"))
        .execute(&mut *tx)
        .await
        .map_err(classify_db_error)?;
    Ok(tx)
}

/// Map a raw database error into the engine's taxonomy.
///
/// Contention SQLSTATEs become `Busy` (retryable once, nothing committed);
/// everything else is `Internal`. Deterministic kinds (`NotFound`,
/// `Conflict`, ...) are produced by the services themselves, never here.
pub fn classify_db_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if let Some(code) = db_err.code() {
            if CONTENTION_SQLSTATES.contains(&code.as_ref()) {
                return CoreError::Busy(format!("lock contention: {db_err}"));
            }
        }
    }
    CoreError::Internal(format!("database error: {err}"))
}
