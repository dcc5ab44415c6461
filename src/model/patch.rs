use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PatchTypeDto {
    pub id: i32,
    pub name: String,
    /// How long a patch of this type is worn before it must be changed
    pub duration_hours: f64,
    pub enabled: bool,
    /// Built-in types are not custom and cannot be edited or deleted
    pub custom: bool,
}

/// Request body for creating or editing a custom patch type
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PatchTypeRequestDto {
    pub name: String,
    pub duration_hours: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SetEnabledDto {
    pub enabled: bool,
}

/// Request body for applying a new patch
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplyPatchDto {
    pub patch_type_id: i32,
    pub location: String,
    #[serde(default)]
    pub notes: Option<String>,
    /// Defaults to the time of the request when omitted
    #[serde(default)]
    pub applied_at: Option<NaiveDateTime>,
}

/// A patch currently being worn, with its derived change schedule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActivePatchDto {
    pub id: i32,
    pub patch_type: PatchTypeDto,
    pub applied_at: NaiveDateTime,
    pub location: String,
    pub notes: Option<String>,
    pub change_at: NaiveDateTime,
    /// Seconds until the patch must be changed, negative once overdue
    pub time_remaining_secs: i64,
    pub is_expired: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LocationSuggestionDto {
    pub location: String,
}
