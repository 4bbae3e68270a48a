//! Project configuration store.
//!
//! The configuration is a single JSON document (`restforge.json`) at the
//! project root, read and written whole. Known keys are `serverPath`,
//! `controllersPath`, `modelsPath` and the optional `schema`; unknown keys
//! round-trip untouched so user additions survive `set` calls.
//!
//! Path values keep their on-disk spelling: the configured
//! `controllersPath` string is reproduced verbatim into generated
//! `require(...)` lines, so the store never normalizes it.

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::core::error::{Error, Result};
use crate::core::templates::{self, TemplateKind};
use crate::core::utils::{create_exclusive, resolve_path};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::fs;
use tracing::debug;

/// File name of the configuration document at the project root.
pub const CONFIG_FILE_NAME: &str = "restforge.json";

/// The parsed configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Path of the generated server bootstrap file, e.g. `./rest/server.js`
    pub server_path: String,
    /// Directory receiving generated controllers
    pub controllers_path: String,
    /// Directory receiving generated models
    pub models_path: String,
    /// Optional declarative schema of controllers and models to materialize
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    /// Keys this tool does not interpret; preserved across rewrites
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectConfig {
    /// Filesystem location of the server bootstrap artifact.
    pub fn server_file(&self, root: &Path) -> PathBuf {
        resolve_path(root, &self.server_path)
    }

    /// Filesystem location of the controllers directory.
    pub fn controllers_dir(&self, root: &Path) -> PathBuf {
        resolve_path(root, &self.controllers_path)
    }

    /// Filesystem location of the models directory.
    pub fn models_dir(&self, root: &Path) -> PathBuf {
        resolve_path(root, &self.models_path)
    }
}

/// Whole-document load/save access to `restforge.json`.
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at an explicit project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root this store reads from and writes to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the configuration document.
    pub fn file_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Write the default configuration file from the packaged template.
    ///
    /// Returns `Ok(false)` without touching the file if one already exists.
    pub async fn create(&self) -> Result<bool> {
        let contents = templates::raw(TemplateKind::Config)?;
        let created = create_exclusive(&self.file_path(), &contents).await?;
        if created {
            debug!(path = %self.file_path().display(), "Created configuration file");
        }
        Ok(created)
    }

    /// Load and parse the configuration document.
    pub async fn load(&self) -> Result<ProjectConfig> {
        let doc = self.read_document().await?;
        Ok(serde_json::from_value(Value::Object(doc))?)
    }

    /// Serialize and rewrite the whole configuration document.
    pub async fn save(&self, config: &ProjectConfig) -> Result<()> {
        let value = serde_json::to_value(config)?;
        let doc = match value {
            Value::Object(map) => map,
            _ => return Err(Error::config("configuration must be a JSON object")),
        };
        self.write_document(&doc).await
    }

    /// Look up a single property by key.
    ///
    /// Unknown keys are a normal outcome and yield `Ok(None)`, never an
    /// error.
    pub async fn get(&self, key: &str) -> Result<Option<Value>> {
        let doc = self.read_document().await?;
        Ok(doc.get(key).cloned())
    }

    /// Set a single property, rewriting the document.
    pub async fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut doc = self.read_document().await?;
        doc.insert(key.to_string(), value);
        self.write_document(&doc).await
    }

    async fn read_document(&self) -> Result<Map<String, Value>> {
        let path = self.file_path();
        if !path.exists() {
            return Err(Error::config(format!(
                "{} not found in {} (run `restforge init` first)",
                CONFIG_FILE_NAME,
                self.root.display()
            )));
        }
        let raw = fs::read_to_string(&path).await?;
        let value: Value = serde_json::from_str(&raw)?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(Error::config(format!(
                "{CONFIG_FILE_NAME} must contain a JSON object"
            ))),
        }
    }

    async fn write_document(&self, doc: &Map<String, Value>) -> Result<()> {
        let mut raw = serde_json::to_string_pretty(doc)?;
        raw.push('\n');
        fs::write(self.file_path(), raw).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> (tempfile::TempDir, ConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn test_create_is_idempotent() {
        let (_dir, store) = store();

        assert!(store.create().await.unwrap());
        assert!(!store.create().await.unwrap());
    }

    #[tokio::test]
    async fn test_load_default_config() {
        let (_dir, store) = store();
        store.create().await.unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.server_path, "./rest/server.js");
        assert_eq!(config.controllers_path, "./rest/controllers");
        assert_eq!(config.models_path, "./rest/models");
        assert!(config.schema.is_none());
    }

    #[tokio::test]
    async fn test_get_unknown_property_is_none() {
        let (_dir, store) = store();
        store.create().await.unwrap();

        assert!(store.get("serverPath").await.unwrap().is_some());
        assert!(store.get("nonExistingProp").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_round_trip() {
        let (_dir, store) = store();
        store.create().await.unwrap();

        let schema = json!({ "controllers": [], "models": [] });
        store.set("schema", schema.clone()).await.unwrap();

        assert_eq!(store.get("schema").await.unwrap(), Some(schema));
        // keys written by `set` survive a typed load/save cycle
        let config = store.load().await.unwrap();
        store.save(&config).await.unwrap();
        assert!(store.get("schema").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_missing_config_is_a_config_error() {
        let (_dir, store) = store();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_paths_resolve_against_root() {
        let config = ProjectConfig {
            server_path: "./rest/server.js".to_string(),
            controllers_path: "./rest/controllers".to_string(),
            models_path: "./rest/models".to_string(),
            schema: None,
            extra: Map::new(),
        };
        let root = Path::new("/project");
        assert_eq!(
            config.server_file(root),
            PathBuf::from("/project/rest/server.js")
        );
        assert_eq!(
            config.controllers_dir(root),
            PathBuf::from("/project/rest/controllers")
        );
        assert_eq!(
            config.models_dir(root),
            PathBuf::from("/project/rest/models")
        );
    }
}
