//! # Validation
//!
//! Independent field validators for provider configuration values.
//!
//! Every validator has the shape `(value, key) -> Validation`: it inspects a
//! single value, uses the key only to build messages, and reports every rule
//! the value breaks. Nothing here panics and nothing holds state, so the
//! functions can be called from any thread.

pub mod error;
pub mod network;
pub mod paths;
pub mod ranges;
pub mod rule;
pub mod security_rule;
pub mod strings;

pub use error::FieldError;
pub use network::{validate_cidr, validate_ip, validate_remote_ip};
pub use paths::{expand_home, validate_app_zip_path, HomeDirError};
pub use ranges::{
    validate_app_instance, validate_app_port, validate_max_conn, validate_port_range,
    validate_public_bandwidth, validate_route_port, validate_weight,
};
pub use rule::{FieldRule, FieldValue, RULE_NAMES};
pub use security_rule::{
    validate_member, validate_security_rule_direction, validate_security_rule_ether_type,
    validate_security_rule_protocol, ClosedSet, EtherType, RuleDirection, RuleProtocol,
};
pub use strings::{
    validate_allowed_string_value, validate_domain_name, validate_notes, validate_route_path,
    validate_service_tags,
};

use tracing::debug;

/// Signature shared by every string-valued validator
pub type StringValidateFn = fn(&str, &str) -> Validation;

/// Signature shared by every integer-valued validator
pub type IntValidateFn = fn(i64, &str) -> Validation;

/// Outcome of validating one field
///
/// Warnings are carried for parity with the calling framework; none of the
/// validators in this crate emit any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Validation {
    pub warnings: Vec<String>,
    pub errors: Vec<FieldError>,
}

impl Validation {
    /// A passing outcome with no warnings and no errors
    pub fn ok() -> Self {
        Self::default()
    }

    /// An outcome holding exactly one error
    pub fn error(error: FieldError) -> Self {
        let mut validation = Self::default();
        validation.push(error);
        validation
    }

    /// Record a failed rule
    pub fn push(&mut self, error: FieldError) {
        debug!(field = error.key(), error = %error, "Field rejected");
        self.errors.push(error);
    }

    /// Append another outcome's warnings and errors, preserving order
    pub fn merge(&mut self, other: Validation) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }

    /// True when no rule failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable error messages, in the order the rules were checked
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Convert into a `Result`, joining all error messages with "; "
    pub fn into_result(self) -> anyhow::Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow::anyhow!("{}", self.messages().join("; ")))
        }
    }
}
