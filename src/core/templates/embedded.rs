//! Templates embedded in the binary at compile time.
//!
//! Uses the `rust-embed` crate to include the packaged `templates/`
//! directory, so no filesystem access is needed to read a template and the
//! binary always carries templates matching its own version.

use rust_embed::RustEmbed;

use crate::core::error::{Error, Result};
use crate::core::templates::TemplateKind;

/// Container for all templates embedded at compile time.
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Raw text of a packaged template.
pub fn raw(kind: TemplateKind) -> Result<String> {
    let name = kind.file_name();
    let file = EmbeddedTemplates::get(name)
        .ok_or_else(|| Error::template(format!("embedded template not found: {name}")))?;
    String::from_utf8(file.data.to_vec())
        .map_err(|e| Error::template(format!("embedded template {name} is not valid UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_are_embedded() {
        for kind in TemplateKind::rendered() {
            let text = raw(kind).unwrap();
            assert!(!text.is_empty(), "template {kind:?} is empty");
        }
        assert!(raw(TemplateKind::Config).unwrap().contains("serverPath"));
    }

    #[test]
    fn test_templates_carry_expected_placeholders() {
        assert!(
            raw(TemplateKind::PlainController)
                .unwrap()
                .contains("{{ controller_name }}")
        );
        assert!(
            raw(TemplateKind::CustomController)
                .unwrap()
                .contains("{{ routes }}")
        );
        let model = raw(TemplateKind::Model).unwrap();
        assert!(model.contains("{{ model_name }}"));
        assert!(model.contains("{{ props }}"));
    }
}
