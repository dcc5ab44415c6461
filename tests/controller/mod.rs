//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, verifying status codes and response
//! bodies for both successful requests and domain rejections.

mod inventory;
mod notification;
mod patch;
mod patch_type;

use patchkeeper_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};
