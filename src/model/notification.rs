use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ChangeSoon,
    Overdue,
    LowStock,
    OutOfStock,
}

impl NotificationKind {
    /// Suffix used when building the deduplication tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChangeSoon => "change-soon",
            Self::Overdue => "overdue",
            Self::LowStock => "low-stock",
            Self::OutOfStock => "out-of-stock",
        }
    }
}

/// Reminder payload delivered to the user
///
/// Two notifications with the same `tag` describe the same alert, consumers should
/// replace rather than stack them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NotificationDto {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub tag: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SettingsDto {
    pub notify_before_hours: f64,
    pub low_inventory_threshold: i32,
}
