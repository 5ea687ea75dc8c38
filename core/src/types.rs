//! OpenAPI v2 document model used by the merger.
//!
//! Only the parts of a schema document that the merge and injection rules
//! touch are modeled as fields. Everything else (`paths`, `info`, `type`,
//! `description`, vendor extensions, ...) is captured in a flattened `extra`
//! map so that a document survives a load/emit cycle untouched.
//!
//! Maps are [`BTreeMap`]s so emitted JSON has a stable, sorted key order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named type definitions, keyed by definition name
/// (e.g. `io.k8s.api.apps.v1.DeploymentSpec`).
pub type Definitions = BTreeMap<String, DefinitionSchema>;

/// A whole OpenAPI schema document.
///
/// # Examples
///
/// ```
/// use kedge_openapi_core::OpenApiDocument;
///
/// let doc: OpenApiDocument = serde_json::from_str(
///     r#"{"swagger": "2.0", "definitions": {"A": {"type": "object"}}}"#,
/// ).unwrap();
/// assert!(doc.definitions.contains_key("A"));
/// assert_eq!(doc.extra["swagger"], "2.0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// Definition name to schema. A document without a `definitions` key
    /// loads as an empty mapping.
    #[serde(default)]
    pub definitions: Definitions,
    /// All other top-level fields, passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OpenApiDocument {
    /// Creates a document holding only the given definitions.
    pub fn with_definitions(definitions: Definitions) -> Self {
        Self {
            definitions,
            extra: Map::new(),
        }
    }

    /// Returns the number of definitions in the document.
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }
}

/// Schema of one named type.
///
/// `properties` values are opaque fragments: the merge logic copies them as
/// whole units and never looks inside.
///
/// # Examples
///
/// ```
/// use kedge_openapi_core::DefinitionSchema;
/// use serde_json::json;
///
/// let def = DefinitionSchema::new()
///     .with_property("replicas", json!({"type": "integer"}))
///     .with_required("replicas");
/// assert!(def.has_property("replicas"));
/// assert_eq!(def.required, vec!["replicas"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionSchema {
    /// Property name to property schema fragment.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Value>,
    /// Names of required properties, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Remaining schema keywords (`type`, `description`, `x-*`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DefinitionSchema {
    /// Creates an empty definition: no properties, nothing required.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property fragment, replacing any existing one of that name.
    pub fn with_property(mut self, name: impl Into<String>, schema: Value) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Appends a name to the required list.
    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    /// Returns `true` if a property of this name is defined.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }
}

/// One injection mapping entry: augment `target` with the properties of
/// `source`.
///
/// `source` names a definition in the upstream (Kubernetes/OpenShift)
/// document; `target` names a Kedge definition. Both the lower-case and the
/// capitalized field spellings are accepted when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injection {
    /// Upstream definition supplying properties.
    #[serde(alias = "Source")]
    pub source: String,
    /// Kedge definition receiving properties.
    #[serde(alias = "Target")]
    pub target: String,
}

impl Injection {
    /// Creates a mapping entry.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}
