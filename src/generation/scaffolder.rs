//! The generator engine.
//!
//! `Scaffolder` turns controller and model requests into files under the
//! configured project tree. All creation operations share one contract:
//! existence is the only state that matters. If the resolved path already
//! holds a file, the operation returns `Ok(false)` and writes nothing, so
//! re-running any generation command is safe.
//!
//! The two mutation operations (`add_routes`, controller registration via
//! [`ServerRegistry`]) rewrite an existing file after a textual dedupe
//! check; everything else is a fresh create-exclusive write.
//!
//! The engine is single-threaded and synchronous in behavior: operations
//! run one after another and only touch the local filesystem. Concurrent
//! invocation from several processes against the same tree is not
//! supported: the existence checks on the mutation paths are
//! check-then-act.

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::core::config::ProjectConfig;
use crate::core::error::Result;
use crate::core::paths;
use crate::core::schema::RouteMap;
use crate::core::templates::{TemplateCatalog, TemplateKind};
use crate::core::utils::{create_exclusive, splice_before};
use crate::generation::registry::ServerRegistry;
use crate::generation::routes::{self, RouteStanza};

// External imports (alphabetized)
use tera::Context;
use tokio::fs;
use tracing::{debug, info, warn};

/// Line exporting the router from a generated controller; new stanzas are
/// inserted immediately above it.
const EXPORT_ANCHOR: &str = "module.exports";

/// Generator engine bound to one project root and its configuration.
pub struct Scaffolder {
    root: PathBuf,
    config: ProjectConfig,
    catalog: TemplateCatalog,
}

impl Scaffolder {
    pub fn new(root: impl Into<PathBuf>, config: ProjectConfig) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            config,
            catalog: TemplateCatalog::new()?,
        })
    }

    /// Project root all configured paths resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Materialize the project tree: the controllers and models
    /// directories, plus the server bootstrap file from its template.
    ///
    /// Returns `Ok(true)` when the server file was created, `Ok(false)`
    /// when it already existed. Directories are created unconditionally.
    pub async fn init(&self) -> Result<bool> {
        let server_file = self.config.server_file(&self.root);

        fs::create_dir_all(self.config.controllers_dir(&self.root)).await?;
        fs::create_dir_all(self.config.models_dir(&self.root)).await?;
        if let Some(parent) = server_file.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = self.catalog.render(TemplateKind::Server, &Context::new())?;
        let created = create_exclusive(&server_file, &content).await?;
        if created {
            info!(path = %server_file.display(), "Created server file");
        } else {
            debug!(path = %server_file.display(), "Server file already present");
        }
        Ok(created)
    }

    /// Create a controller with the CRUD default routes and register it in
    /// the server file.
    pub async fn create_plain_controller(&self, name: &str) -> Result<bool> {
        let base = paths::controller_base(name);

        let mut context = Context::new();
        context.insert("controller_name", base);
        let content = self
            .catalog
            .render(TemplateKind::PlainController, &context)?;

        self.create_controller_file(name, base, content).await
    }

    /// Create a controller carrying one stanza per entry of `routes`, in
    /// mapping order, and register it in the server file.
    pub async fn create_controller_with_routes(
        &self,
        name: &str,
        routes: &RouteMap,
    ) -> Result<bool> {
        let base = paths::controller_base(name);
        let stanzas = routes::from_map(routes)?;

        let mut context = Context::new();
        context.insert("controller_name", base);
        context.insert("routes", &routes::render_block(&stanzas));
        let content = self
            .catalog
            .render(TemplateKind::CustomController, &context)?;

        self.create_controller_file(name, base, content).await
    }

    /// Insert additional route stanzas into an existing controller.
    ///
    /// Returns `Ok(false)` when the controller does not exist; routes can
    /// only be added to a generated artifact. Stanzas whose prefix is
    /// already present in the file (or repeated within `routes` itself)
    /// are skipped silently; the call still succeeds.
    pub async fn add_routes(&self, name: &str, routes: &RouteMap) -> Result<bool> {
        let path = self.controller_path(name);
        if !path.exists() {
            warn!(
                controller = name,
                path = %path.display(),
                "Cannot add routes: controller does not exist"
            );
            return Ok(false);
        }

        let stanzas = routes::from_map(routes)?;
        let content = fs::read_to_string(&path).await?;

        let mut fresh: Vec<&RouteStanza> = Vec::new();
        for stanza in &stanzas {
            let prefix = stanza.prefix();
            if content.contains(&prefix) {
                debug!(route = %prefix, "Route already present, skipping");
                continue;
            }
            if fresh.iter().any(|f| f.prefix() == prefix) {
                continue;
            }
            fresh.push(stanza);
        }

        if fresh.is_empty() {
            return Ok(true);
        }

        let rendered: Vec<RouteStanza> = fresh.into_iter().cloned().collect();
        let block = format!("{}\n\n", routes::render_block(&rendered));
        let merged = splice_before(&content, EXPORT_ANCHOR, &block);
        fs::write(&path, merged).await?;

        info!(
            controller = name,
            added = rendered.len(),
            "Added routes to controller"
        );
        Ok(true)
    }

    /// Create a data model from the model template.
    ///
    /// `props` is reproduced into the file after reformatting: a newline
    /// plus one space after every comma, a newline plus three spaces after
    /// every opening brace, a newline plus one space before every closing
    /// brace.
    pub async fn create_model(&self, name: &str, props: &str) -> Result<bool> {
        let models_dir = self.config.models_dir(&self.root);
        let path = models_dir.join(paths::model_file_name(name));

        let mut context = Context::new();
        context.insert("model_name", name);
        context.insert("props", &format_props(props));
        let content = self.catalog.render(TemplateKind::Model, &context)?;

        fs::create_dir_all(&models_dir).await?;
        let created = create_exclusive(&path, &content).await?;
        if created {
            info!(model = name, path = %path.display(), "Created model");
        } else {
            debug!(model = name, "Model already exists, skipping");
        }
        Ok(created)
    }

    /// Resolved path of a controller artifact, after suffix normalization.
    pub fn controller_path(&self, name: &str) -> PathBuf {
        self.config
            .controllers_dir(&self.root)
            .join(paths::controller_file_name(name))
    }

    /// Resolved path of a model artifact.
    pub fn model_path(&self, name: &str) -> PathBuf {
        self.config
            .models_dir(&self.root)
            .join(paths::model_file_name(name))
    }

    async fn create_controller_file(
        &self,
        name: &str,
        base: &str,
        content: String,
    ) -> Result<bool> {
        let path = self.controller_path(name);
        fs::create_dir_all(self.config.controllers_dir(&self.root)).await?;

        if !create_exclusive(&path, &content).await? {
            debug!(controller = name, path = %path.display(), "Controller already exists, skipping");
            return Ok(false);
        }
        info!(controller = name, path = %path.display(), "Created controller");

        let registry = ServerRegistry::new(
            self.config.server_file(&self.root),
            &self.config.controllers_path,
        );
        registry.register(base).await?;
        Ok(true)
    }
}

/// Reformat a raw property-declaration literal for the model template.
///
/// Purely textual and order-sensitive: commas first, then braces, so the
/// output is byte-exact reproducible from the raw string.
pub fn format_props(raw: &str) -> String {
    raw.replace(',', ",\n ")
        .replace('{', "{\n   ")
        .replace('}', "\n }")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_props_commas_and_braces() {
        assert_eq!(
            format_props("{a: String, b: Boolean}"),
            "{\n   a: String,\n b: Boolean\n }"
        );
    }

    #[test]
    fn test_format_props_without_braces() {
        assert_eq!(
            format_props("prop1: String, prop2: Boolean, prop3: Number"),
            "prop1: String,\n prop2: Boolean,\n prop3: Number"
        );
    }

    #[test]
    fn test_format_props_empty() {
        assert_eq!(format_props(""), "");
    }
}
