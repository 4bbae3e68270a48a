//! Schema-driven batch generation.
//!
//! Reads the `schema` key from the configuration store, validates it as a
//! whole, then drives the [`Scaffolder`] once per entry. Validation is
//! all-or-nothing: an invalid schema generates nothing. Generation itself
//! is not transactional; each artifact is an independent idempotent
//! create, so re-running a build only produces the artifacts that are
//! still missing.

// Internal imports (std, crate)
use std::path::PathBuf;

use crate::core::config::ConfigStore;
use crate::core::error::{Error, Result};
use crate::core::schema::{ControllerRoutes, Schema};
use crate::generation::scaffolder::Scaffolder;

// External imports (alphabetized)
use tracing::{debug, info};

/// Outcome counters for one build run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    /// Artifacts written by this run
    pub created: usize,
    /// Artifacts that already existed and were left untouched
    pub skipped: usize,
}

impl BuildSummary {
    fn record(&mut self, created: bool) {
        if created {
            self.created += 1;
        } else {
            self.skipped += 1;
        }
    }
}

/// Materializes the configured schema into artifacts.
pub struct SchemaBuilder {
    store: ConfigStore,
}

impl SchemaBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            store: ConfigStore::new(root),
        }
    }

    /// Generate every controller and model the schema names, in schema
    /// order.
    ///
    /// Fails before touching the filesystem when the configuration has no
    /// `schema` key or the schema fails structural validation.
    pub async fn build(&self) -> Result<BuildSummary> {
        let schema_value = self.store.get("schema").await?.ok_or_else(|| {
            Error::schema("configuration has no `schema` to build (add one to restforge.json)")
        })?;
        let schema = Schema::from_value(&schema_value)?;

        let config = self.store.load().await?;
        let scaffolder = Scaffolder::new(self.store.root(), config)?;

        let mut summary = BuildSummary::default();

        for controller in &schema.controllers {
            debug!(controller = %controller.name, "Building schema controller");
            let created = match &controller.routes {
                ControllerRoutes::Custom(routes) => {
                    scaffolder
                        .create_controller_with_routes(&controller.name, routes)
                        .await?
                }
                // from_value already rejected any marker other than "plain"
                ControllerRoutes::Preset(_) => {
                    scaffolder.create_plain_controller(&controller.name).await?
                }
            };
            summary.record(created);
        }

        for model in &schema.models {
            debug!(model = %model.name, "Building schema model");
            let created = scaffolder.create_model(&model.name, &model.props).await?;
            summary.record(created);
        }

        info!(
            created = summary.created,
            skipped = summary.skipped,
            "Schema build complete"
        );
        Ok(summary)
    }
}
