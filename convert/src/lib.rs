//! Assembly of the Kedge OpenAPI schema.
//!
//! Loads the Kubernetes and OpenShift OpenAPI documents, merges them, and
//! injects upstream properties into the generated Kedge definitions using
//! [`kedge_openapi_core`].
//!
//! # Quick start
//!
//! ```no_run
//! use kedge_openapi_convert::ConvertConfig;
//!
//! let conversion = ConvertConfig::load("kedge-openapi.yml")
//!     .unwrap()
//!     .resolve()
//!     .unwrap();
//! conversion.run(std::io::stdout().lock()).unwrap();
//! ```

mod config;
mod convert;
mod error;
mod generator;
mod loader;

pub use config::ConvertConfig;
pub use convert::{Conversion, assemble, write_document};
pub use error::{BoxError, ConvertError, Result};
pub use generator::{GeneratedSpec, PregeneratedSpec, SpecGenerator};
pub use loader::{load_input, parse_openapi_definition};
