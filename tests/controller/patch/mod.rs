//! Tests for patch application controller endpoints.

mod apply_patch;
mod get_active_patches;
mod unapply_patch;

use patchkeeper::model::patch::ApplyPatchDto;

use super::*;

fn apply_request(patch_type_id: i32, location: &str) -> axum::Json<ApplyPatchDto> {
    axum::Json(ApplyPatchDto {
        patch_type_id,
        location: location.to_string(),
        notes: None,
        applied_at: None,
    })
}
