use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InventoryDto {
    pub patch_type_id: i32,
    pub patch_type_name: String,
    pub count: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SetInventoryDto {
    pub count: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RestockDto {
    pub amount: i32,
}

/// Stock warning for an enabled patch type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InventoryAlertDto {
    pub patch_type_id: i32,
    pub patch_type_name: String,
    pub count: i32,
    pub is_low: bool,
    pub is_out: bool,
}
