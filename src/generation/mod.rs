//! Scaffolding engine.
//!
//! Turns (name, kind, parameters) into generated source files and performs
//! the two incremental merges on already-generated artifacts: inserting
//! route stanzas into a controller and registering a controller inside the
//! server bootstrap file.
//!
//! Every creation is idempotent by existence: an artifact that is already
//! on disk is never overwritten, and the engine reports the skip as an
//! `Ok(false)` outcome rather than an error.

pub mod builder;
pub mod registry;
pub mod routes;
pub mod scaffolder;

pub use builder::{BuildSummary, SchemaBuilder};
pub use scaffolder::Scaffolder;
