//! Route stanza rendering and normalization.
//!
//! A stanza is the handler block emitted into a controller file for one
//! (method, route-name) pair. Method and route-name tokens are lowercased
//! before emission, so `"GET"`, `"gEt"` and `"get"` produce identical
//! output. The stanza's opening line is the external contract: downstream
//! checks (and our own dedupe) probe for the exact byte sequence
//! `router.<method>('/<route>',(req,res)`.

use crate::core::error::{Error, Result};
use crate::core::schema::RouteMap;

/// One route handler to emit, with tokens already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStanza {
    method: String,
    route: String,
}

impl RouteStanza {
    pub fn new(method: &str, route: &str) -> Self {
        Self {
            method: method.to_lowercase(),
            route: route.to_lowercase(),
        }
    }

    /// Opening bytes of the rendered stanza.
    ///
    /// This exact string is the dedupe key: a stanza is only inserted into a
    /// controller whose content does not already contain its prefix.
    pub fn prefix(&self) -> String {
        format!("router.{}('/{}',(req,res)", self.method, self.route)
    }

    /// Full stanza text, without a trailing newline.
    pub fn render(&self) -> String {
        format!(
            "router.{method}('/{route}',(req,res) => {{\n  res.json({{ route: '{route}' }});\n}});",
            method = self.method,
            route = self.route,
        )
    }
}

/// Build stanzas from a route mapping, keeping insertion order.
///
/// Every value in the mapping must be an HTTP method string; anything else
/// fails as a schema error before any file is touched.
pub fn from_map(routes: &RouteMap) -> Result<Vec<RouteStanza>> {
    routes
        .iter()
        .map(|(name, method)| {
            let method = method.as_str().ok_or_else(|| {
                Error::schema(format!(
                    "route `{name}` must map to an HTTP method string, got {method}"
                ))
            })?;
            Ok(RouteStanza::new(method, name))
        })
        .collect()
}

/// Concatenate stanzas into the block inserted into controller files.
pub fn render_block(stanzas: &[RouteStanza]) -> String {
    stanzas
        .iter()
        .map(RouteStanza::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}
