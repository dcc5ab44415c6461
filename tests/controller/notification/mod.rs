//! Tests for notification controller endpoints.

mod get_notifications;

use super::*;
