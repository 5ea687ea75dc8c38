//! Injection of upstream properties into Kedge definitions.
//!
//! Kedge types embed Kubernetes/OpenShift types. The generated Kedge
//! definitions only carry the Kedge-specific fields, so each one is
//! augmented with the properties of the upstream type it wraps, as listed in
//! an ordered [`Injection`] mapping.
//!
//! # Example
//!
//! ```
//! use kedge_openapi_core::*;
//! use serde_json::json;
//!
//! let mut api = Definitions::new();
//! api.insert(
//!     "io.k8s.api.apps.v1.DeploymentSpec".into(),
//!     DefinitionSchema::new()
//!         .with_property("replicas", json!({"type": "integer"}))
//!         .with_property("template", json!({"$ref": "#/definitions/PodTemplateSpec"}))
//!         .with_required("template"),
//! );
//!
//! let mapping = vec![Injection::new(
//!     "io.k8s.api.apps.v1.DeploymentSpec",
//!     "io.kedge.DeploymentSpecMod",
//! )];
//! let defs = inject_kedge_spec(&api, Definitions::new(), &mapping);
//!
//! let spec = &defs["io.kedge.DeploymentSpecMod"];
//! assert!(spec.has_property("replicas"));
//! assert!(spec.required.is_empty()); // `template` is exempted
//! ```

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{DefinitionSchema, Definitions, Injection};

/// A required-field exemption for one target definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredExemption {
    /// Kedge definition the exemption applies to.
    pub target: &'static str,
    /// Field name removed from that definition's `required` list.
    pub field: &'static str,
}

/// Fields that are never required on the listed Kedge definitions.
///
/// These types embed a pod template that Kedge fills in from its own
/// top-level `containers` section, so users never write `template` directly.
pub const REQUIRED_EXEMPTIONS: &[RequiredExemption] = &[
    RequiredExemption {
        target: "io.kedge.DeploymentSpecMod",
        field: "template",
    },
    RequiredExemption {
        target: "io.kedge.DeploymentConfigSpecMod",
        field: "template",
    },
    RequiredExemption {
        target: "io.kedge.JobSpecMod",
        field: "template",
    },
];

/// Returns the fields exempted from `required` on `target`.
pub fn exempt_fields(target: &str) -> impl Iterator<Item = &'static str> + '_ {
    REQUIRED_EXEMPTIONS
        .iter()
        .filter(move |exemption| exemption.target == target)
        .map(|exemption| exemption.field)
}

/// Returns `items` followed by each entry of `new_items` not seen yet, with
/// duplicates dropped.
///
/// # Examples
///
/// ```
/// use kedge_openapi_core::add_unique_items;
///
/// let merged = add_unique_items(
///     &["template".to_string(), "replicas".to_string()],
///     &["selector".to_string(), "template".to_string()],
/// );
/// assert_eq!(merged, vec!["template", "replicas", "selector"]);
/// ```
pub fn add_unique_items(items: &[String], new_items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .chain(new_items)
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}

/// Augments `target` with the properties of `source`.
///
/// Properties already defined on `target` are kept as they are; the rest are
/// copied over from `source`. The required lists are unioned with
/// [`add_unique_items`], target names first.
pub fn augment_properties(
    source: &DefinitionSchema,
    mut target: DefinitionSchema,
) -> DefinitionSchema {
    for (name, schema) in &source.properties {
        if !target.properties.contains_key(name) {
            target.properties.insert(name.clone(), schema.clone());
        }
    }
    target.required = add_unique_items(&target.required, &source.required);
    target
}

/// Applies every [`REQUIRED_EXEMPTIONS`] entry for `target_name` to
/// `definition`. Returns `true` if a field was removed.
pub fn apply_exemptions(target_name: &str, definition: &mut DefinitionSchema) -> bool {
    let before = definition.required.len();
    for field in exempt_fields(target_name) {
        definition.required.retain(|name| name != field);
    }
    definition.required.len() != before
}

/// Injects upstream properties into the Kedge definitions.
///
/// Entries are applied in mapping order. A source missing from
/// `api_definitions`, or a target missing from `definitions`, is treated as
/// an empty definition. A target listed more than once is augmented again on
/// top of the earlier result.
pub fn inject_kedge_spec(
    api_definitions: &Definitions,
    mut definitions: Definitions,
    mapping: &[Injection],
) -> Definitions {
    let empty = DefinitionSchema::default();

    for entry in mapping {
        let source = match api_definitions.get(&entry.source) {
            Some(source) => source,
            None => {
                warn!(
                    source = %entry.source,
                    definition = %entry.target,
                    "Injection source not found in API definitions"
                );
                &empty
            }
        };

        let target = definitions.remove(&entry.target).unwrap_or_default();
        let known = target.properties.len();
        let mut augmented = augment_properties(source, target);
        debug!(
            source = %entry.source,
            definition = %entry.target,
            added = augmented.properties.len() - known,
            "Injected properties"
        );

        if apply_exemptions(&entry.target, &mut augmented) {
            debug!(definition = %entry.target, "Dropped exempted fields from required");
        }

        definitions.insert(entry.target.clone(), augmented);
    }

    definitions
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn deployment_spec() -> DefinitionSchema {
        DefinitionSchema::new()
            .with_property("replicas", json!({"type": "integer", "format": "int32"}))
            .with_property("selector", json!({"$ref": "#/definitions/LabelSelector"}))
            .with_property("template", json!({"$ref": "#/definitions/PodTemplateSpec"}))
            .with_required("template")
    }

    #[test]
    fn test_add_unique_items_preserves_first_seen_order() {
        let merged = add_unique_items(&strings(&["b", "a"]), &strings(&["c", "a", "d", "c"]));
        assert_eq!(merged, strings(&["b", "a", "c", "d"]));
    }

    #[test]
    fn test_add_unique_items_empty_inputs() {
        assert!(add_unique_items(&[], &[]).is_empty());
        assert_eq!(add_unique_items(&[], &strings(&["x"])), strings(&["x"]));
    }

    #[test]
    fn test_augment_adds_missing_properties() {
        let source = deployment_spec();
        let target = DefinitionSchema::new().with_property("name", json!({"type": "string"}));

        let augmented = augment_properties(&source, target);

        let names: Vec<&str> = augmented.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["name", "replicas", "selector", "template"]);
    }

    #[test]
    fn test_augment_never_overwrites_target_properties() {
        let source = deployment_spec();
        let own = json!({"type": "string", "description": "kedge replicas"});
        let target = DefinitionSchema::new().with_property("replicas", own.clone());

        let augmented = augment_properties(&source, target);

        assert_eq!(augmented.properties["replicas"], own);
    }

    #[test]
    fn test_augment_unions_required_target_first() {
        let source = DefinitionSchema::new()
            .with_required("selector")
            .with_required("template");
        let target = DefinitionSchema::new()
            .with_required("template")
            .with_required("name");

        let augmented = augment_properties(&source, target);

        assert_eq!(augmented.required, strings(&["template", "name", "selector"]));
    }

    #[test]
    fn test_augment_keeps_target_extra_keywords() {
        let mut target = DefinitionSchema::new();
        target.extra.insert("description".into(), json!("kedge deployment"));
        let mut source = deployment_spec();
        source.extra.insert("description".into(), json!("upstream deployment"));

        let augmented = augment_properties(&source, target);

        assert_eq!(augmented.extra["description"], "kedge deployment");
    }

    #[test]
    fn test_exemption_table_covers_pod_template_owners() {
        let targets: Vec<&str> = REQUIRED_EXEMPTIONS.iter().map(|e| e.target).collect();
        assert_eq!(
            targets,
            vec![
                "io.kedge.DeploymentSpecMod",
                "io.kedge.DeploymentConfigSpecMod",
                "io.kedge.JobSpecMod",
            ]
        );
        assert!(REQUIRED_EXEMPTIONS.iter().all(|e| e.field == "template"));
        assert_eq!(exempt_fields("io.kedge.ServiceSpecMod").count(), 0);
    }

    #[test]
    fn test_inject_drops_template_keeping_order() {
        let mut defs = Definitions::new();
        defs.insert(
            "io.kedge.DeploymentSpecMod".into(),
            DefinitionSchema::new()
                .with_required("template")
                .with_required("replicas"),
        );
        let api = Definitions::new();
        let mapping = vec![Injection::new("Unrelated", "io.kedge.DeploymentSpecMod")];

        let out = inject_kedge_spec(&api, defs, &mapping);

        assert_eq!(out["io.kedge.DeploymentSpecMod"].required, strings(&["replicas"]));
    }

    #[test]
    fn test_inject_exempts_all_listed_targets() {
        let mut api = Definitions::new();
        api.insert("Spec".into(), deployment_spec());
        let mapping: Vec<Injection> = REQUIRED_EXEMPTIONS
            .iter()
            .map(|e| Injection::new("Spec", e.target))
            .collect();

        let out = inject_kedge_spec(&api, Definitions::new(), &mapping);

        for exemption in REQUIRED_EXEMPTIONS {
            let def = &out[exemption.target];
            assert!(def.has_property("template"));
            assert!(def.required.is_empty());
        }
    }

    #[test]
    fn test_inject_leaves_template_required_elsewhere() {
        let mut api = Definitions::new();
        api.insert("io.k8s.api.apps.v1.StatefulSetSpec".into(), deployment_spec());
        let mapping = vec![Injection::new(
            "io.k8s.api.apps.v1.StatefulSetSpec",
            "io.kedge.StatefulSetSpecMod",
        )];

        let out = inject_kedge_spec(&api, Definitions::new(), &mapping);

        assert_eq!(out["io.kedge.StatefulSetSpecMod"].required, strings(&["template"]));
    }

    #[test]
    fn test_inject_missing_source_leaves_target_unchanged() {
        let target = DefinitionSchema::new()
            .with_property("name", json!({"type": "string"}))
            .with_required("name");
        let mut defs = Definitions::new();
        defs.insert("io.kedge.ServiceSpecMod".into(), target.clone());
        let mapping = vec![Injection::new("io.k8s.DoesNotExist", "io.kedge.ServiceSpecMod")];

        let out = inject_kedge_spec(&Definitions::new(), defs, &mapping);

        assert_eq!(out["io.kedge.ServiceSpecMod"], target);
    }

    #[test]
    fn test_inject_missing_target_is_created() {
        let mut api = Definitions::new();
        api.insert("Spec".into(), deployment_spec());
        let mapping = vec![Injection::new("Spec", "io.kedge.NewMod")];

        let out = inject_kedge_spec(&api, Definitions::new(), &mapping);

        assert_eq!(out["io.kedge.NewMod"], deployment_spec());
    }

    #[test]
    fn test_inject_is_idempotent() {
        let mut api = Definitions::new();
        api.insert("Spec".into(), deployment_spec());
        api.insert(
            "Meta".into(),
            DefinitionSchema::new()
                .with_property("name", json!({"type": "string"}))
                .with_required("name"),
        );
        let mut defs = Definitions::new();
        defs.insert(
            "io.kedge.DeploymentSpecMod".into(),
            DefinitionSchema::new().with_required("template").with_required("containers"),
        );
        let mapping = vec![
            Injection::new("Spec", "io.kedge.DeploymentSpecMod"),
            Injection::new("Meta", "io.kedge.DeploymentSpecMod"),
            Injection::new("Meta", "io.kedge.ServiceSpecMod"),
        ];

        let once = inject_kedge_spec(&api, defs, &mapping);
        let twice = inject_kedge_spec(&api, once.clone(), &mapping);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_inject_repeated_target_applies_sequentially() {
        let mut api = Definitions::new();
        api.insert(
            "First".into(),
            DefinitionSchema::new()
                .with_property("shared", json!({"type": "string"}))
                .with_required("a"),
        );
        api.insert(
            "Second".into(),
            DefinitionSchema::new()
                .with_property("shared", json!({"type": "integer"}))
                .with_property("extra", json!({}))
                .with_required("b"),
        );
        let mapping = vec![
            Injection::new("First", "io.kedge.Mod"),
            Injection::new("Second", "io.kedge.Mod"),
        ];

        let out = inject_kedge_spec(&api, Definitions::new(), &mapping);

        let def = &out["io.kedge.Mod"];
        assert_eq!(def.properties["shared"], json!({"type": "string"}));
        assert!(def.has_property("extra"));
        assert_eq!(def.required, strings(&["a", "b"]));
    }
}
