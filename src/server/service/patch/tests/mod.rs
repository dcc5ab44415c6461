
use chrono::{Duration, NaiveDateTime, Utc};
use patchkeeper_test_utils::prelude::*;

use crate::{model::patch::ApplyPatchDto, server::data::inventory::InventoryRepository};

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn apply_request(patch_type_id: i32, location: &str) -> ApplyPatchDto {
    ApplyPatchDto {
        patch_type_id,
        location: location.to_string(),
        notes: None,
        applied_at: None,
    }
}

async fn stock_of(test: &TestContext, patch_type_id: i32) -> Result<Option<i32>, TestError> {
    Ok(InventoryRepository::new(&test.db)
        .get_by_patch_type_id(patch_type_id)
        .await?
        .map(|entry| entry.count))
}
