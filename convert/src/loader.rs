//! Loading OpenAPI documents from disk.

use std::path::Path;

use kedge_openapi_core::OpenApiDocument;
use tracing::info;

use crate::error::{ConvertError, Result};

/// Reads and parses an OpenAPI JSON document.
///
/// # Errors
///
/// Returns [`ConvertError::Read`] if the file cannot be read, or
/// [`ConvertError::Parse`] if it is not a JSON object of the expected shape.
/// Both carry the offending path.
pub fn parse_openapi_definition(path: impl AsRef<Path>) -> Result<OpenApiDocument> {
    let path = path.as_ref();
    let content = std::fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&content).map_err(|source| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a named input document, tagging any failure with `input`.
///
/// # Errors
///
/// Returns [`ConvertError::Input`] wrapping the error from
/// [`parse_openapi_definition`].
pub fn load_input(input: &'static str, path: impl AsRef<Path>) -> Result<OpenApiDocument> {
    let path = path.as_ref();
    let document = parse_openapi_definition(path).map_err(|err| err.for_input(input))?;
    info!(
        input,
        path = %path.display(),
        definitions = document.definition_count(),
        "Loaded OpenAPI document"
    );
    Ok(document)
}
