//! Body location rotation.
//!
//! Patches should not be reapplied to the same site while it is still occupied, so the
//! suggestion walks a fixed list of sites and picks one that is free.

use crate::server::model::db::PatchApplicationModel;

/// Application sites offered to the user, in rotation order.
pub const BODY_LOCATIONS: [&str; 8] = [
    "Left abdomen",
    "Right abdomen",
    "Left buttock",
    "Right buttock",
    "Left thigh",
    "Right thigh",
    "Left upper arm",
    "Right upper arm",
];

/// Suggests where to apply the next patch.
///
/// Returns the first site in [`BODY_LOCATIONS`] not occupied by any of `worn`. When every site
/// is occupied, returns the site of the patch that has been worn the longest. Site names are
/// compared case-insensitively, ignoring surrounding whitespace.
pub fn suggest_next_location(worn: &[PatchApplicationModel]) -> &'static str {
    let occupied = |site: &str| {
        worn.iter()
            .any(|application| application.location.trim().eq_ignore_ascii_case(site))
    };

    if let Some(free) = BODY_LOCATIONS.iter().find(|&&site| !occupied(site)) {
        return *free;
    }

    worn.iter()
        .min_by_key(|application| (application.applied_at, application.id))
        .and_then(|oldest| {
            BODY_LOCATIONS
                .iter()
                .find(|&&site| oldest.location.trim().eq_ignore_ascii_case(site))
        })
        .copied()
        .unwrap_or(BODY_LOCATIONS[0])
}
