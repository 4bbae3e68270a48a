//! Controller registration inside the generated server file.
//!
//! The server bootstrap artifact is never regenerated once written; each
//! controller is merged in by appending two managed lines, so hand edits
//! elsewhere in the file survive. Idempotence is textual: each line is
//! checked for by exact substring containment before it is inserted.

// Internal imports (std, crate)
use std::path::PathBuf;

use crate::core::error::{Error, Result};
use crate::core::utils::splice_before;

// External imports (alphabetized)
use tokio::fs;
use tracing::{debug, info};

/// Line that mounts the controllers inside the server file; registration
/// lines are inserted immediately above it.
const MOUNT_ANCHOR: &str = "app.listen";

/// Merges controller registrations into the server artifact.
pub struct ServerRegistry {
    server_file: PathBuf,
    controllers_path: String,
}

impl ServerRegistry {
    /// `controllers_path` is the configured string, reproduced verbatim in
    /// generated `require(...)` lines.
    pub fn new(server_file: PathBuf, controllers_path: &str) -> Self {
        Self {
            server_file,
            controllers_path: controllers_path.to_string(),
        }
    }

    /// Register a controller by its canonical base name.
    ///
    /// Appends an import line and a route-mount line unless each is already
    /// present; returns `Ok(false)` when both lines existed and nothing was
    /// written.
    pub async fn register(&self, base: &str) -> Result<bool> {
        if !self.server_file.exists() {
            return Err(Error::config(format!(
                "server file {} not found (run `restforge init` first)",
                self.server_file.display()
            )));
        }

        let content = fs::read_to_string(&self.server_file).await?;

        let import_line = format!(
            "var {base}Controller = require('{}/{base}Controller');",
            self.controllers_path
        );
        let mount_line = format!("app.use('/api/{base}', {base}Controller);");

        let mut block = String::new();
        for line in [&import_line, &mount_line] {
            if !content.contains(line.as_str()) {
                block.push_str(line);
                block.push('\n');
            }
        }

        if block.is_empty() {
            debug!(controller = base, "Controller already registered");
            return Ok(false);
        }

        block.push('\n');
        let merged = splice_before(&content, MOUNT_ANCHOR, &block);
        fs::write(&self.server_file, merged).await?;

        info!(
            controller = base,
            server = %self.server_file.display(),
            "Registered controller in server file"
        );
        Ok(true)
    }
}
