//! Packaged templates for generated artifacts.
//!
//! Restforge ships four parameterized text templates (server bootstrap,
//! CRUD controller, custom-route controller, data model) plus the default
//! configuration document. They are embedded in the binary at compile time
//! and rendered through a cached Tera instance, so the tool works
//! immediately after `cargo install` with no template files on disk.
//!
//! Generated content is a pure function of (template, substitution values):
//! the engine never post-processes rendered output, which keeps artifacts
//! byte-exact reproducible from the raw template text.

mod catalog;
mod embedded;

pub use catalog::TemplateCatalog;
pub use embedded::raw;

/// The templates packaged with the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Express server bootstrap (`server.js`)
    Server,
    /// Controller with CRUD default routes
    PlainController,
    /// Controller rendered around caller-provided route stanzas
    CustomController,
    /// Mongoose data model
    Model,
    /// Default configuration document (copied raw, never rendered)
    Config,
}

impl TemplateKind {
    /// File name of the template inside the packaged `templates/` folder.
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::Server => "server.js.tera",
            TemplateKind::PlainController => "plain_controller.js.tera",
            TemplateKind::CustomController => "custom_controller.js.tera",
            TemplateKind::Model => "model.js.tera",
            TemplateKind::Config => "config.json",
        }
    }

    /// The kinds rendered through Tera. `Config` is excluded: it is copied
    /// verbatim when the configuration file is created.
    pub fn rendered() -> [TemplateKind; 4] {
        [
            TemplateKind::Server,
            TemplateKind::PlainController,
            TemplateKind::CustomController,
            TemplateKind::Model,
        ]
    }
}
