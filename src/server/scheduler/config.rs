/// Cron expression for the notification scan
/// Runs every minute at second 0
pub const DEFAULT_CRON_EXPRESSION: &str = "0 * * * * *";
