//! Document-level definition merging.
//!
//! Merging is a plain structural copy with "source wins" semantics: a
//! definition in the source replaces any definition of the same name in the
//! target. No attempt is made to reconcile the two.
//!
//! # Example
//!
//! ```
//! use kedge_openapi_core::*;
//!
//! let mut kubernetes = OpenApiDocument::default();
//! kubernetes.definitions.insert("A".into(), DefinitionSchema::new());
//!
//! let mut openshift = OpenApiDocument::default();
//! openshift.definitions.insert("B".into(), DefinitionSchema::new());
//!
//! merge_definitions(&mut kubernetes, openshift);
//! assert_eq!(kubernetes.definition_count(), 2);
//! ```

use tracing::debug;

use crate::{Definitions, OpenApiDocument};

/// Copies every definition of `source` into `target`, overwriting on name
/// collision.
///
/// Only `definitions` are merged; the source's other top-level fields are
/// dropped.
pub fn merge_definitions(target: &mut OpenApiDocument, source: OpenApiDocument) {
    extend_definitions(target, source.definitions);
}

/// Inserts each of `definitions` into `target`, overwriting on name
/// collision.
pub fn extend_definitions(target: &mut OpenApiDocument, definitions: Definitions) {
    for (name, definition) in definitions {
        if target.definitions.insert(name.clone(), definition).is_some() {
            debug!(definition = %name, "Replaced existing definition");
        }
    }
}
