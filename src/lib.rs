//! Restforge Library
//!
//! This library provides the core functionality for scaffolding
//! Express-style REST API projects from a declarative JSON configuration:
//! generating a server bootstrap file, controllers and data models from
//! packaged templates, and incrementally merging new routes and controller
//! registrations into already-generated files.

pub mod core;
pub mod generation;

pub use crate::core::{
    config::{ConfigStore, ProjectConfig},
    error::{Error, Result},
    schema::Schema,
};
pub use crate::generation::{BuildSummary, Scaffolder, SchemaBuilder};
