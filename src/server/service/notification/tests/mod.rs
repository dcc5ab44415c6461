
use chrono::{Duration, NaiveDate, NaiveDateTime};
use patchkeeper_test_utils::prelude::*;

use crate::server::util::lifecycle::{compute_active_patch, ActivePatch};

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}

/// Patch of `duration_hours` applied `hours_ago` before the reference time
fn worn_patch(id: i32, duration_hours: f64, hours_ago: i64) -> ActivePatch {
    let now = reference_time();

    compute_active_patch(
        factory::mock_application_model(id, 1, now - Duration::hours(hours_ago)),
        factory::mock_patch_type_model(1, duration_hours),
        now,
    )
    .unwrap()
}
