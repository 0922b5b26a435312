//! # Field Errors
//!
//! Every rejection a validator can produce. The `Display` output of each
//! variant is the diagnostic shown to the user, so wording matters here.

use thiserror::Error;

/// A single validation failure for one configuration field
///
/// Every variant carries the field key so messages stay meaningful once they
/// are collected away from the field that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{key:?} must contain tags whose maximum length is {max} characters")]
    TagsTooLong { key: String, max: usize },

    #[error("{key:?} must contain a value from {allowed:?}, got {value:?}")]
    NotAllowed {
        key: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("{key:?} ({value:?}) must contain from {min} to {max} characters")]
    RoutePathLength {
        key: String,
        value: String,
        min: usize,
        max: usize,
    },

    #[error("{key:?} ({value:?}) must start with a forward slash '/'")]
    RoutePathPrefix { key: String, value: String },

    #[error("{key:?} ({value:?}) must not contain a '?'")]
    RoutePathQuery { key: String, value: String },

    #[error("{key:?} ({value}) must be in the range of {start} to {end}")]
    OutOfRange {
        key: String,
        value: i64,
        start: i64,
        end: i64,
    },

    #[error("{key:?} ({value:?}) must contain a '.', example.com, foo.example.com")]
    DomainName { key: String, value: String },

    // TODO: confirm with the platform team whether zero instances is valid.
    // The check accepts 0 while this wording asks for more than 0.
    #[error("{key:?} ({value}) must be greater than 0")]
    NegativeInstances { key: String, value: i64 },

    #[error("{key:?} ({path:?}) home directory in the given path couldn't be expanded")]
    HomeExpansion { key: String, path: String },

    #[error("{key:?} ({path:?}) doesn't exist")]
    PathNotFound { key: String, path: String },

    #[error("{key:?} should not exceed {max} characters")]
    NotesTooLong { key: String, max: usize },

    #[error("{key:?} ({value}) must be greater than or equal to 0")]
    NegativeBandwidth { key: String, value: i64 },

    #[error("{key:?} ({value}) must be one of the value from {allowed:?}")]
    UnsupportedBandwidth {
        key: String,
        value: i64,
        allowed: &'static [i64],
    },

    #[error("{key:?} must be between {min} and {max}")]
    NotBetween { key: String, min: i64, max: i64 },

    #[error("{key:?} contains an invalid {kind} {value:?}. Valid types are {allowed:?}.")]
    InvalidMember {
        key: String,
        kind: &'static str,
        value: String,
        allowed: String,
    },

    #[error("{key:?} must be a valid ip address")]
    InvalidIp { key: String },

    #[error("{key:?} must be a valid cidr address")]
    InvalidCidr { key: String },

    #[error("{key:?} must be a valid remote ip address (cidr or ip)")]
    InvalidRemoteIp { key: String },

    #[error("{key:?} must be of type {expected}, got {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl FieldError {
    /// Key of the field this error was raised for
    pub fn key(&self) -> &str {
        match self {
            FieldError::TagsTooLong { key, .. }
            | FieldError::NotAllowed { key, .. }
            | FieldError::RoutePathLength { key, .. }
            | FieldError::RoutePathPrefix { key, .. }
            | FieldError::RoutePathQuery { key, .. }
            | FieldError::OutOfRange { key, .. }
            | FieldError::DomainName { key, .. }
            | FieldError::NegativeInstances { key, .. }
            | FieldError::HomeExpansion { key, .. }
            | FieldError::PathNotFound { key, .. }
            | FieldError::NotesTooLong { key, .. }
            | FieldError::NegativeBandwidth { key, .. }
            | FieldError::UnsupportedBandwidth { key, .. }
            | FieldError::NotBetween { key, .. }
            | FieldError::InvalidMember { key, .. }
            | FieldError::InvalidIp { key }
            | FieldError::InvalidCidr { key }
            | FieldError::InvalidRemoteIp { key }
            | FieldError::TypeMismatch { key, .. } => key,
        }
    }
}
