use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::model::notification::NotificationDto;

/// Remembers which notification tags have already fired.
///
/// A tag stays remembered only while its notification keeps being due; once a scan no longer
/// produces it, the tag is forgotten and the alert may fire again if the condition recurs.
#[derive(Debug, Default)]
pub struct NotificationTracker {
    fired: HashSet<String>,
    last_scan: Option<NaiveDateTime>,
}

impl NotificationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notifications from `due` that have not fired yet and marks them as fired.
    ///
    /// `due` must be the complete result of a scan taken at `scanned_at`, tags missing from it
    /// are forgotten. A scan older than the last one accepted is stale and ignored entirely.
    pub fn take_new(
        &mut self,
        due: Vec<NotificationDto>,
        scanned_at: NaiveDateTime,
    ) -> Vec<NotificationDto> {
        if self.last_scan.is_some_and(|last| scanned_at < last) {
            return Vec::new();
        }
        self.last_scan = Some(scanned_at);

        let current: HashSet<&str> = due.iter().map(|n| n.tag.as_str()).collect();
        self.fired.retain(|tag| current.contains(tag.as_str()));

        due.into_iter()
            .filter(|notification| self.fired.insert(notification.tag.clone()))
            .collect()
    }

    pub fn has_fired(&self, tag: &str) -> bool {
        self.fired.contains(tag)
    }
}
