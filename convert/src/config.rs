//! Conversion configuration.
//!
//! The three input paths can come from a YAML file, from command-line flags,
//! or a mix of both. Flags win over the file.
//!
//! # Example YAML
//!
//! ```yaml
//! kedge_spec: generated/kedge.json
//! kubernetes_schema: schemas/kubernetes.json
//! openshift_schema: schemas/openshift.json
//! ```

use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::convert::Conversion;
use crate::error::{ConvertError, Result};

/// Partially specified conversion inputs.
///
/// # Examples
///
/// ```
/// use kedge_openapi_convert::ConvertConfig;
///
/// let file: ConvertConfig = serde_yaml::from_str(
///     "kubernetes_schema: k8s.json\nopenshift_schema: os.json\n",
/// ).unwrap();
/// let flags = ConvertConfig {
///     kedge_spec: Some("kedge.json".into()),
///     ..ConvertConfig::default()
/// };
///
/// let conversion = flags.or(file).resolve().unwrap();
/// assert_eq!(conversion.kubernetes_schema.to_str(), Some("k8s.json"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Generated Kedge definitions and mapping (JSON).
    #[serde(default)]
    pub kedge_spec: Option<PathBuf>,
    /// Kubernetes OpenAPI schema (JSON).
    #[serde(default)]
    pub kubernetes_schema: Option<PathBuf>,
    /// OpenShift OpenAPI schema (JSON).
    #[serde(default)]
    pub openshift_schema: Option<PathBuf>,
}

impl ConvertConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Read`] if the file cannot be opened, or
    /// [`ConvertError::Config`] if it is not valid configuration YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|source| ConvertError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fills every unset field of `self` from `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            kedge_spec: self.kedge_spec.or(fallback.kedge_spec),
            kubernetes_schema: self.kubernetes_schema.or(fallback.kubernetes_schema),
            openshift_schema: self.openshift_schema.or(fallback.openshift_schema),
        }
    }

    /// Checks that every input is set and returns the conversion plan.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MissingSetting`] naming the first unset field.
    pub fn resolve(self) -> Result<Conversion> {
        Ok(Conversion {
            kedge_spec: self
                .kedge_spec
                .ok_or(ConvertError::MissingSetting("kedge_spec"))?,
            kubernetes_schema: self
                .kubernetes_schema
                .ok_or(ConvertError::MissingSetting("kubernetes_schema"))?,
            openshift_schema: self
                .openshift_schema
                .ok_or(ConvertError::MissingSetting("openshift_schema"))?,
        })
    }
}
