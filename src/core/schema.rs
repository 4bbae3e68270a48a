//! Declarative schema of controllers and models to materialize.
//!
//! The schema lives under the `schema` key of the configuration document:
//!
//! ```json
//! {
//!   "controllers": [
//!     { "name": "user", "routes": "plain" },
//!     { "name": "search", "routes": { "byName": "GET", "reindex": "POST" } }
//!   ],
//!   "models": [
//!     { "name": "User", "props": "{name: String, active: Boolean}" }
//!   ]
//! }
//! ```
//!
//! Validation is structural and happens before any artifact is generated:
//! both `controllers` and `models` must be present and must be arrays, and
//! every controller's `routes` must be either the literal `"plain"` or a
//! route-name → HTTP-method mapping. A schema that fails the gate produces
//! nothing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::error::{Error, Result};

/// Routes marker selecting the CRUD-only controller template.
pub const PLAIN_ROUTES: &str = "plain";

/// Route-name → HTTP-method mapping, in JSON insertion order.
///
/// `serde_json` runs with `preserve_order`, so iterating the map emits
/// stanzas in the order the user wrote them.
pub type RouteMap = Map<String, Value>;

/// A validated schema document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    pub controllers: Vec<ControllerSpec>,
    pub models: Vec<ModelSpec>,
}

/// One controller entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerSpec {
    pub name: String,
    pub routes: ControllerRoutes,
}

/// Either the `"plain"` marker or an explicit route mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControllerRoutes {
    Preset(String),
    Custom(RouteMap),
}

impl ControllerRoutes {
    /// Whether this controller uses the CRUD-only template.
    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Preset(marker) if marker == PLAIN_ROUTES)
    }
}

/// One model entry. `props` is an opaque property-declaration literal,
/// reproduced into the generated file after reformatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    pub name: String,
    pub props: String,
}

/// Structural validation of a raw schema value: an object carrying
/// `controllers` and `models`, both arrays.
pub fn validate(value: &Value) -> bool {
    value.get("controllers").is_some_and(Value::is_array)
        && value.get("models").is_some_and(Value::is_array)
}

impl Schema {
    /// Parse and fully validate a raw schema value.
    ///
    /// All-or-nothing: every entry must be well-formed before any artifact
    /// generation starts, so a bad tail entry cannot leave a half-built
    /// schema behind.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !validate(value) {
            return Err(Error::schema(
                "schema must be an object with `controllers` and `models` arrays",
            ));
        }

        let schema: Schema = serde_json::from_value(value.clone())?;

        for controller in &schema.controllers {
            if let ControllerRoutes::Preset(marker) = &controller.routes {
                if marker != PLAIN_ROUTES {
                    return Err(Error::schema(format!(
                        "controller `{}` has unknown routes marker `{marker}` \
                         (expected \"{PLAIN_ROUTES}\" or a route mapping)",
                        controller.name
                    )));
                }
            }
        }

        Ok(schema)
    }
}
