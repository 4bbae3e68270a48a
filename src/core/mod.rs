//! Restforge Core Library
//!
//! This module provides the core building blocks for scaffolding
//! Express-style REST API projects: the project configuration store,
//! artifact path resolution, the declarative schema model, and the
//! packaged templates.

pub mod config;
pub mod error;
pub mod paths;
pub mod schema;
pub mod templates;
pub mod utils;

pub use error::{Error, Result};
