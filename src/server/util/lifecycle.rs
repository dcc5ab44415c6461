//! Patch lifecycle calculations.
//!
//! Everything here is derived from an application record, its patch type, and the current time.
//! Nothing is persisted: callers recompute on every request or scan.

use chrono::{Duration, NaiveDateTime};

use crate::{
    model::patch::ActivePatchDto,
    server::{
        error::Error,
        model::db::{PatchApplicationModel, PatchTypeModel},
    },
};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Converts a fractional number of hours into a [`Duration`] with millisecond precision.
///
/// Returns `None` for values that are not finite or do not fit a [`Duration`].
pub fn hours(value: f64) -> Option<Duration> {
    let millis = (value * MILLIS_PER_HOUR).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }

    Duration::try_milliseconds(millis as i64)
}

/// Time a patch applied at `applied_at` must be changed, `None` if it is not representable.
pub fn change_time(applied_at: NaiveDateTime, duration_hours: f64) -> Option<NaiveDateTime> {
    applied_at.checked_add_signed(hours(duration_hours)?)
}

/// A patch currently being worn together with its change schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivePatch {
    pub application: PatchApplicationModel,
    pub patch_type: PatchTypeModel,
    /// `applied_at + duration_hours`
    pub change_at: NaiveDateTime,
    /// `change_at - now`, negative once the change is overdue
    pub time_remaining: Duration,
    pub is_expired: bool,
}

/// Derives the change schedule of an application at `now`.
///
/// # Arguments
/// - `application` - The application record
/// - `patch_type` - The type referenced by `application.patch_type_id`
/// - `now` - Reference time for the remaining time calculation
///
/// # Returns
/// - `Ok(ActivePatch)` - Schedule where `is_expired` holds exactly when `now >= change_at`
/// - `Err(Error::InternalError)` - The change time falls outside the supported date range
pub fn compute_active_patch(
    application: PatchApplicationModel,
    patch_type: PatchTypeModel,
    now: NaiveDateTime,
) -> Result<ActivePatch, Error> {
    let change_at = change_time(application.applied_at, patch_type.duration_hours).ok_or_else(|| {
        Error::InternalError(format!(
            "Change time of application ID {} with a duration of {} hours is out of range",
            application.id, patch_type.duration_hours
        ))
    })?;
    let time_remaining = change_at.signed_duration_since(now);

    Ok(ActivePatch {
        application,
        patch_type,
        change_at,
        time_remaining,
        is_expired: time_remaining <= Duration::zero(),
    })
}

/// Orders active patches soonest change first.
///
/// The sort is stable, so patches sharing a change time keep their insertion order as long
/// as `patches` is ordered by application ID.
pub fn sort_active_patches(patches: &mut [ActivePatch]) {
    patches.sort_by_key(|patch| patch.change_at);
}

/// Returns true when the change is due within the reminder window but not yet overdue.
///
/// Due iff `0 < change_at - now <= notify_before_hours`. A window too large to represent
/// covers every pending change.
pub fn is_notification_due(patch: &ActivePatch, notify_before_hours: f64, now: NaiveDateTime) -> bool {
    let remaining = patch.change_at.signed_duration_since(now);
    if remaining <= Duration::zero() {
        return false;
    }

    hours(notify_before_hours).is_none_or(|window| remaining <= window)
}

/// Stock warning flags for a single inventory entry.
///
/// The two flags are mutually exclusive: an empty entry is out, not low.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InventoryStatus {
    pub is_low: bool,
    pub is_out: bool,
}

impl InventoryStatus {
    /// Whether either warning applies
    pub fn needs_attention(&self) -> bool {
        self.is_low || self.is_out
    }
}

/// Classifies a stock count against the low inventory `threshold`.
pub fn low_inventory_alert(count: i32, threshold: i32) -> InventoryStatus {
    InventoryStatus {
        is_low: count > 0 && count <= threshold,
        is_out: count == 0,
    }
}

impl From<ActivePatch> for ActivePatchDto {
    fn from(patch: ActivePatch) -> Self {
        Self {
            id: patch.application.id,
            patch_type: patch.patch_type.into(),
            applied_at: patch.application.applied_at,
            location: patch.application.location,
            notes: patch.application.notes,
            change_at: patch.change_at,
            time_remaining_secs: patch.time_remaining.num_seconds(),
            is_expired: patch.is_expired,
        }
    }
}
