//! Presence status resolution for guest visits.
//!
//! A visit's status is never set by an explicit transition command; it is
//! recomputed on every create/update from the entry/exit dates relative to
//! an injected evaluation date. The wall clock is also injected (used only
//! to default a missing exit time), so every rule here is deterministic and
//! unit-testable.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Derived status of a guest visit.
///
/// `Inside` is a reserved value: it parses, formats, and counts as active,
/// but no code path produces it — the check-in-scan signal that would is
/// out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    Scheduled,
    Entered,
    Inside,
    Exited,
    Cancelled,
}

impl PresenceStatus {
    /// Storage representation (TEXT column value).
    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceStatus::Scheduled => "scheduled",
            PresenceStatus::Entered => "entered",
            PresenceStatus::Inside => "inside",
            PresenceStatus::Exited => "exited",
            PresenceStatus::Cancelled => "cancelled",
        }
    }

    /// Parse the storage representation.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "scheduled" => Ok(PresenceStatus::Scheduled),
            "entered" => Ok(PresenceStatus::Entered),
            "inside" => Ok(PresenceStatus::Inside),
            "exited" => Ok(PresenceStatus::Exited),
            "cancelled" => Ok(PresenceStatus::Cancelled),
            other => Err(CoreError::Internal(format!(
                "unknown presence status '{other}'"
            ))),
        }
    }

    /// Active statuses keep the visit open for listing and double-entry checks.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            PresenceStatus::Scheduled | PresenceStatus::Entered | PresenceStatus::Inside
        )
    }
}

/// The date/time facts a presence resolution is computed from.
#[derive(Debug, Clone, Copy)]
pub struct PresenceEvent {
    pub entry_date: NaiveDate,
    pub entry_time: NaiveTime,
    pub exit_date: Option<NaiveDate>,
    pub exit_time: Option<NaiveTime>,
    pub cancelled: bool,
}

/// Outcome of a resolution: what the service layer must persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceResolution {
    pub status: PresenceStatus,
    pub exit_date: Option<NaiveDate>,
    pub exit_time: Option<NaiveTime>,
    pub is_active: bool,
    /// True when this resolution realizes an entry today — the caller must
    /// fire the entry cascade exactly once, in the same transaction.
    pub entered_today: bool,
}

/// Resolve a visit's status from its dates relative to `today`.
///
/// Rules, in precedence order:
/// 1. Explicit cancellation => `Cancelled`, inactive; missing exit fields
///    default to `today` / `now` so closed visits always carry them.
/// 2. Entry date after today => `Scheduled`.
/// 3. Exit date before today => `Exited`, inactive; a missing exit time
///    defaults to `now`.
/// 4. Otherwise => `Entered` (entry realized; no exit recorded, or the exit
///    is today or in the future).
pub fn resolve(event: &PresenceEvent, today: NaiveDate, now: NaiveTime) -> PresenceResolution {
    if event.cancelled {
        return PresenceResolution {
            status: PresenceStatus::Cancelled,
            exit_date: Some(event.exit_date.unwrap_or(today)),
            exit_time: Some(event.exit_time.unwrap_or(now)),
            is_active: false,
            entered_today: false,
        };
    }

    if event.entry_date > today {
        return PresenceResolution {
            status: PresenceStatus::Scheduled,
            exit_date: event.exit_date,
            exit_time: event.exit_time,
            is_active: true,
            entered_today: false,
        };
    }

    if let Some(exit_date) = event.exit_date {
        if exit_date < today {
            return PresenceResolution {
                status: PresenceStatus::Exited,
                exit_date: Some(exit_date),
                exit_time: Some(event.exit_time.unwrap_or(now)),
                is_active: false,
                entered_today: false,
            };
        }
    }

    PresenceResolution {
        status: PresenceStatus::Entered,
        exit_date: event.exit_date,
        exit_time: event.exit_time,
        is_active: true,
        entered_today: event.entry_date == today,
    }
}

/// Guard against silent back-dating on updates.
///
/// Changing an entry date to a value strictly before `today` fails, unless
/// the value equals the previously stored entry date (so unrelated edits on
/// historical visits pass through). Creates (`stored = None`) are exempt.
pub fn validate_entry_date_change(
    stored: Option<NaiveDate>,
    incoming: NaiveDate,
    today: NaiveDate,
) -> Result<(), CoreError> {
    if let Some(stored) = stored {
        if incoming < today && incoming != stored {
            return Err(CoreError::InvalidTransition(format!(
                "cannot back-date entry from {stored} to {incoming} (today is {today})"
            )));
        }
    }
    Ok(())
}
