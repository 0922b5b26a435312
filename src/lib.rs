//! Field Validators Library
//!
//! Validators that reject malformed provider configuration values (ports, IP
//! addresses, CIDR blocks, enumerations, archive paths, length limits) before
//! they are sent to the remote API.
//!
//! Each validator takes a value and the key of the field it came from and
//! returns a [`Validation`] holding zero or more human-readable errors.
//!
//! ```
//! use field_validators::validate_route_path;
//!
//! assert!(validate_route_path("/api", "path").is_valid());
//! assert_eq!(validate_route_path("/x?y", "path").errors.len(), 1);
//! ```

pub mod constants;
pub mod manifest;
pub mod validation;

pub use manifest::{FieldEntry, FieldManifest, FieldReport, ManifestError, ManifestReport};
pub use validation::*;
