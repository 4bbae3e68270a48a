//! Artifact file naming rules.
//!
//! Controllers follow a suffix normalization rule: a user may pass either
//! `"test"` or `"testController"` and both resolve to the same on-disk file,
//! so the two spellings cannot produce duplicate controllers for one logical
//! resource. The rule is textual and case-sensitive: `"testController"` and
//! `"TestController"` remain distinct artifacts.

/// Literal suffix recognized at the end of controller names.
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// Strip one trailing `Controller` suffix from a raw controller name.
///
/// The returned base name identifies the controller in server registration
/// lines and inside the generated file.
pub fn controller_base(raw: &str) -> &str {
    raw.strip_suffix(CONTROLLER_SUFFIX).unwrap_or(raw)
}

/// File name for a controller artifact.
///
/// `"test"` and `"testController"` both map to `testController.js`.
pub fn controller_file_name(raw: &str) -> String {
    format!("{}{}.js", controller_base(raw), CONTROLLER_SUFFIX)
}

/// File name for a model artifact. Models have no suffix rule.
pub fn model_file_name(raw: &str) -> String {
    format!("{raw}.js")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_file_name_appends_suffix() {
        assert_eq!(controller_file_name("test"), "testController.js");
    }

    #[test]
    fn test_controller_file_name_keeps_existing_suffix() {
        assert_eq!(controller_file_name("test1Controller"), "test1Controller.js");
    }

    #[test]
    fn test_controller_suffix_is_case_sensitive() {
        // "Testcontroller" does not end with the literal suffix
        assert_eq!(
            controller_file_name("Testcontroller"),
            "TestcontrollerController.js"
        );
    }

    #[test]
    fn test_controller_base() {
        assert_eq!(controller_base("test"), "test");
        assert_eq!(controller_base("test1Controller"), "test1");
    }

    #[test]
    fn test_model_file_name() {
        assert_eq!(model_file_name("Testmodel"), "Testmodel.js");
        assert_eq!(model_file_name("UserController"), "UserController.js");
    }
}
