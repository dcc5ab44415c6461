//! Tests for inventory controller endpoints.

mod get_inventory;

use super::*;
