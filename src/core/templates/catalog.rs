//! Cached Tera catalog over the embedded templates.

// Internal imports (std, crate)
use std::sync::Arc;

use crate::core::error::{Error, Result};
use crate::core::templates::{TemplateKind, embedded};

// External imports (alphabetized)
use tera::{Context, Tera};

/// Renders the packaged templates with context data.
///
/// All rendered templates are loaded into one Tera instance at construction
/// and shared behind an `Arc`, so cloning the catalog is cheap.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    tera: Arc<Tera>,
}

impl TemplateCatalog {
    /// Load every rendered template from the embedded resources.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        // Generated files are plain JS source, not markup
        tera.autoescape_on(vec![]);

        for kind in TemplateKind::rendered() {
            let text = embedded::raw(kind)?;
            tera.add_raw_template(kind.file_name(), &text)?;
        }

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render one template with the given context.
    pub fn render(&self, kind: TemplateKind, context: &Context) -> Result<String> {
        if kind == TemplateKind::Config {
            return Err(Error::template(
                "the configuration template is copied raw, not rendered",
            ));
        }
        Ok(self.tera.render(kind.file_name(), context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_controller_name() {
        let catalog = TemplateCatalog::new().unwrap();
        let mut context = Context::new();
        context.insert("controller_name", "user");

        let output = catalog
            .render(TemplateKind::PlainController, &context)
            .unwrap();
        assert!(output.contains("resource: 'user'"));
        assert!(!output.contains("{{ controller_name }}"));
    }

    #[test]
    fn test_render_matches_naive_substitution() {
        // The byte-exact contract: rendering equals the raw template with
        // the placeholder textually replaced.
        let catalog = TemplateCatalog::new().unwrap();
        let mut context = Context::new();
        context.insert("controller_name", "invoice");

        let rendered = catalog
            .render(TemplateKind::PlainController, &context)
            .unwrap();
        let expected =
            embedded::raw(TemplateKind::PlainController)
                .unwrap()
                .replace("{{ controller_name }}", "invoice");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_server_template_needs_no_context() {
        let catalog = TemplateCatalog::new().unwrap();
        let output = catalog
            .render(TemplateKind::Server, &Context::new())
            .unwrap();
        assert!(output.contains("app.listen"));
    }

    #[test]
    fn test_render_config_kind_is_rejected() {
        let catalog = TemplateCatalog::new().unwrap();
        let err = catalog
            .render(TemplateKind::Config, &Context::new())
            .unwrap_err();
        assert!(matches!(err, Error::Template(_)));
    }
}
