//! Tests for patch type controller endpoints.

mod create_patch_type;
mod update_patch_type;

use super::*;
