//! Assembly of the merged Kedge OpenAPI document.
//!
//! The run is strictly sequential:
//!
//! 1. generate the Kedge definitions and mapping,
//! 2. load the Kubernetes and OpenShift schemas,
//! 3. merge OpenShift into Kubernetes,
//! 4. inject upstream properties into the Kedge definitions,
//! 5. add the Kedge definitions to the merged document,
//! 6. write it out as pretty-printed JSON.
//!
//! Any failure aborts the run before anything is written.

use std::io::Write;
use std::path::{Path, PathBuf};

use kedge_openapi_core::{OpenApiDocument, extend_definitions, inject_kedge_spec, merge_definitions};
use tracing::info;

use crate::error::{ConvertError, Result};
use crate::generator::{PregeneratedSpec, SpecGenerator};
use crate::loader::load_input;

/// Fully resolved conversion inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Generated Kedge definitions and mapping (JSON).
    pub kedge_spec: PathBuf,
    /// Kubernetes OpenAPI schema (JSON).
    pub kubernetes_schema: PathBuf,
    /// OpenShift OpenAPI schema (JSON).
    pub openshift_schema: PathBuf,
}

impl Conversion {
    /// Builds the merged document from the configured files.
    ///
    /// # Errors
    ///
    /// See [`assemble`].
    pub fn assemble(&self) -> Result<OpenApiDocument> {
        assemble(
            &PregeneratedSpec::new(&self.kedge_spec),
            &self.kubernetes_schema,
            &self.openshift_schema,
        )
    }

    /// Builds the merged document and writes it to `out`.
    ///
    /// # Errors
    ///
    /// See [`assemble`] and [`write_document`].
    pub fn run(&self, out: impl Write) -> Result<()> {
        let document = self.assemble()?;
        write_document(out, &document)
    }
}

/// Builds the merged document.
///
/// # Errors
///
/// Returns [`ConvertError::Generator`] if `generator` fails, or
/// [`ConvertError::Input`] naming `kubernetes` or `openshift` if that schema
/// cannot be loaded.
pub fn assemble(
    generator: &dyn SpecGenerator,
    kubernetes_schema: &Path,
    openshift_schema: &Path,
) -> Result<OpenApiDocument> {
    let kedge = generator.generate().map_err(ConvertError::Generator)?;

    let mut api = load_input("kubernetes", kubernetes_schema)?;
    let openshift = load_input("openshift", openshift_schema)?;
    merge_definitions(&mut api, openshift);

    let definitions = inject_kedge_spec(&api.definitions, kedge.definitions, &kedge.mapping);
    extend_definitions(&mut api, definitions);

    info!(
        definitions = api.definition_count(),
        injections = kedge.mapping.len(),
        "Assembled merged OpenAPI document"
    );
    Ok(api)
}

/// Writes `document` as two-space indented JSON followed by a newline.
///
/// # Errors
///
/// Returns [`ConvertError::Write`] if `out` fails, or
/// [`ConvertError::Encode`] if the document cannot be encoded.
pub fn write_document(mut out: impl Write, document: &OpenApiDocument) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, document).map_err(|err| {
        if err.is_io() {
            ConvertError::Write(err.into())
        } else {
            ConvertError::Encode(err)
        }
    })?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
