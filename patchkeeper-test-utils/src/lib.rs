//! Test utilities for Patchkeeper.
//!
//! Tests declare the tables and fixtures they need with [`TestBuilder`], then work against the
//! in-memory SQLite database of the resulting [`TestContext`].

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
