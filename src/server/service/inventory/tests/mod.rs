
use patchkeeper_test_utils::prelude::*;
