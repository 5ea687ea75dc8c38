//! Core OpenAPI definition merging for Kedge.
//!
//! This crate holds the decision logic of the schema converter:
//!
//! - [`OpenApiDocument`] and [`DefinitionSchema`] — the document model.
//!   Property schemas are opaque [`serde_json::Value`] fragments.
//! - [`merge_definitions`] — copies definitions from one document into
//!   another, source winning on name collisions.
//! - [`augment_properties`] — folds a source definition's properties and
//!   required list into a target definition without overwriting anything the
//!   target already defines.
//! - [`inject_kedge_spec`] — applies an ordered [`Injection`] mapping and
//!   then the [`REQUIRED_EXEMPTIONS`] table.
//!
//! # Example
//!
//! ```
//! use kedge_openapi_core::*;
//! use serde_json::json;
//!
//! let mut kubernetes: OpenApiDocument = serde_json::from_value(json!({
//!     "definitions": {"A": {"properties": {"x": {}}, "required": ["x"]}}
//! })).unwrap();
//! let openshift: OpenApiDocument = serde_json::from_value(json!({
//!     "definitions": {"B": {"properties": {"y": {}}}}
//! })).unwrap();
//! merge_definitions(&mut kubernetes, openshift);
//!
//! let mut kedge = Definitions::new();
//! kedge.insert(
//!     "io.kedge.DeploymentSpecMod".into(),
//!     DefinitionSchema::new().with_required("template"),
//! );
//! let mapping = [Injection::new("A", "io.kedge.DeploymentSpecMod")];
//! let injected = inject_kedge_spec(&kubernetes.definitions, kedge, &mapping);
//! extend_definitions(&mut kubernetes, injected);
//!
//! let spec = &kubernetes.definitions["io.kedge.DeploymentSpecMod"];
//! assert!(spec.has_property("x"));
//! assert_eq!(spec.required, vec!["x"]);
//! assert_eq!(kubernetes.definition_count(), 3);
//! ```

mod inject;
mod merge;
mod types;

pub use inject::{
    REQUIRED_EXEMPTIONS, RequiredExemption, add_unique_items, apply_exemptions,
    augment_properties, exempt_fields, inject_kedge_spec,
};
pub use merge::{extend_definitions, merge_definitions};
pub use types::*;
