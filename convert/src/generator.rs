//! Source of the Kedge definitions and injection mapping.
//!
//! The definitions are produced from the Kedge Go types by a separate code
//! generation step. This module only defines the seam: a [`SpecGenerator`]
//! yields a [`GeneratedSpec`], and the assembler never looks at how it was
//! produced. [`PregeneratedSpec`] reads the generator's JSON output from disk.

use std::path::{Path, PathBuf};

use kedge_openapi_core::{Definitions, Injection};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BoxError, ConvertError};

/// Generated Kedge definitions plus the ordered injection mapping.
///
/// On disk this is a JSON object:
///
/// ```json
/// {
///   "definitions": { "io.kedge.DeploymentSpecMod": { "required": ["template"] } },
///   "mapping": [
///     { "source": "io.k8s.api.apps.v1.DeploymentSpec", "target": "io.kedge.DeploymentSpecMod" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSpec {
    /// Kedge definitions to be augmented.
    #[serde(default)]
    pub definitions: Definitions,
    /// Injection entries, applied in order.
    #[serde(default)]
    pub mapping: Vec<Injection>,
}

/// Produces the Kedge definitions and mapping.
pub trait SpecGenerator {
    /// Runs the generator.
    ///
    /// # Errors
    ///
    /// Any failure is returned opaquely and surfaced to the user unchanged.
    fn generate(&self) -> Result<GeneratedSpec, BoxError>;
}

impl SpecGenerator for GeneratedSpec {
    fn generate(&self) -> Result<GeneratedSpec, BoxError> {
        Ok(self.clone())
    }
}

/// Reads a previously generated [`GeneratedSpec`] from a JSON file.
#[derive(Debug, Clone)]
pub struct PregeneratedSpec {
    path: PathBuf,
}

impl PregeneratedSpec {
    /// Creates a generator reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file this generator reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SpecGenerator for PregeneratedSpec {
    fn generate(&self) -> Result<GeneratedSpec, BoxError> {
        let content = std::fs::read(&self.path).map_err(|source| ConvertError::Read {
            path: self.path.clone(),
            source,
        })?;
        let spec: GeneratedSpec =
            serde_json::from_slice(&content).map_err(|source| ConvertError::Parse {
                path: self.path.clone(),
                source,
            })?;
        info!(
            path = %self.path.display(),
            definitions = spec.definitions.len(),
            mapping = spec.mapping.len(),
            "Loaded generated Kedge spec"
        );
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pregenerated_reads_definitions_and_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kedge.json");
        std::fs::write(
            &path,
            r#"{
                "definitions": {"io.kedge.JobSpecMod": {"required": ["template"]}},
                "mapping": [
                    {"source": "io.k8s.api.batch.v1.JobSpec", "target": "io.kedge.JobSpecMod"},
                    {"Source": "io.k8s.api.core.v1.PodSpec", "Target": "io.kedge.JobSpecMod"}
                ]
            }"#,
        )
        .unwrap();

        let spec = PregeneratedSpec::new(&path).generate().unwrap();
        assert_eq!(spec.definitions["io.kedge.JobSpecMod"].required, vec!["template"]);
        assert_eq!(
            spec.mapping,
            vec![
                Injection::new("io.k8s.api.batch.v1.JobSpec", "io.kedge.JobSpecMod"),
                Injection::new("io.k8s.api.core.v1.PodSpec", "io.kedge.JobSpecMod"),
            ]
        );
    }

    #[test]
    fn test_pregenerated_missing_file_fails() {
        let err = PregeneratedSpec::new("/nonexistent/kedge.json")
            .generate()
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/kedge.json"));
    }

    #[test]
    fn test_in_memory_spec_generates_itself() {
        let spec = GeneratedSpec {
            definitions: Definitions::new(),
            mapping: vec![Injection::new("A", "B")],
        };
        assert_eq!(spec.generate().unwrap(), spec);
    }
}
