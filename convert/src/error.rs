//! Error types for schema conversion.
//!
//! Every failure is fatal to the run: nothing here is retried or downgraded
//! to a warning. Callers propagate with `?` up to the binary's `main`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by a [`SpecGenerator`](crate::SpecGenerator).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while assembling the merged document.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// An input file could not be read.
    #[error("cannot read file \"{}\": {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An input file is not a valid OpenAPI JSON document.
    #[error("error unmarshalling OpenAPI definition in \"{}\": {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Loading a named input (`kubernetes`, `openshift`) failed.
    #[error("{input}: {source}")]
    Input {
        input: &'static str,
        #[source]
        source: Box<ConvertError>,
    },

    /// The Kedge spec generator failed. The message is passed through as-is.
    #[error("{0}")]
    Generator(BoxError),

    /// A configuration file could not be parsed.
    #[error("invalid config file \"{}\": {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A required setting was given neither on the command line nor in the
    /// config file.
    #[error("missing setting `{0}`: pass it as a flag or set it in the config file")]
    MissingSetting(&'static str),

    /// The merged document could not be encoded as JSON.
    #[error("cannot encode merged document: {0}")]
    Encode(#[source] serde_json::Error),

    /// Writing the merged document failed.
    #[error("cannot write merged document: {0}")]
    Write(#[from] io::Error),
}

impl ConvertError {
    /// Wraps `self` with the name of the input it came from.
    pub fn for_input(self, input: &'static str) -> Self {
        Self::Input {
            input,
            source: Box::new(self),
        }
    }
}

/// Convenience alias for results with [`ConvertError`].
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_prefix_in_message() {
        let err = ConvertError::Read {
            path: PathBuf::from("/nonexistent/k8s.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        }
        .for_input("kubernetes");

        assert_eq!(
            err.to_string(),
            "kubernetes: cannot read file \"/nonexistent/k8s.json\": No such file or directory"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_generator_message_passes_through() {
        let err = ConvertError::Generator("kedge spec: unknown field `foo`".into());
        assert_eq!(err.to_string(), "kedge spec: unknown field `foo`");
    }
}
