//! Server application core modules.
//!
//! This module contains the backend of Patchkeeper: HTTP routing, persistence of patch types,
//! applications and inventory, the patch lifecycle calculations, and the periodic scan that
//! fires change and stock reminders.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
