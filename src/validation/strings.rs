//! # String Validation
//!
//! Length limits, route paths, domain names and free-form allow lists.

use super::{FieldError, Validation};
use crate::constants::{
    MAX_NOTES_LENGTH, MAX_ROUTE_PATH_LENGTH, MAX_SERVICE_TAGS_LENGTH, MIN_ROUTE_PATH_LENGTH,
};

/// Validate the tag list of a service instance
/// Length is measured in bytes
pub fn validate_service_tags(value: &str, key: &str) -> Validation {
    if value.len() > MAX_SERVICE_TAGS_LENGTH {
        return Validation::error(FieldError::TagsTooLong {
            key: key.to_string(),
            max: MAX_SERVICE_TAGS_LENGTH,
        });
    }
    Validation::ok()
}

/// Build a validator accepting only the given values (exact, case-sensitive)
///
/// The allow list is copied, so the returned closure owns everything it needs
/// and can be shared across threads.
pub fn validate_allowed_string_value<S: AsRef<str>>(
    valid_values: &[S],
) -> impl Fn(&str, &str) -> Validation + Clone + Send + Sync + 'static {
    let valid_values: Vec<String> = valid_values
        .iter()
        .map(|value| value.as_ref().to_string())
        .collect();
    move |value, key| check_allowed(&valid_values, value, key)
}

/// Membership check behind [`validate_allowed_string_value`]
pub(crate) fn check_allowed(valid_values: &[String], value: &str, key: &str) -> Validation {
    if valid_values.iter().any(|valid| valid == value) {
        return Validation::ok();
    }
    Validation::error(FieldError::NotAllowed {
        key: key.to_string(),
        value: value.to_string(),
        allowed: valid_values.to_vec(),
    })
}

/// Validate a route path
///
/// An empty path is accepted (the API treats it as the root route). Otherwise
/// every broken rule is reported:
/// - length between 2 and 128 bytes
/// - starts with '/'
/// - no '?'
pub fn validate_route_path(value: &str, key: &str) -> Validation {
    let mut validation = Validation::ok();
    if value.is_empty() {
        return validation;
    }

    if !(MIN_ROUTE_PATH_LENGTH..=MAX_ROUTE_PATH_LENGTH).contains(&value.len()) {
        validation.push(FieldError::RoutePathLength {
            key: key.to_string(),
            value: value.to_string(),
            min: MIN_ROUTE_PATH_LENGTH,
            max: MAX_ROUTE_PATH_LENGTH,
        });
    }

    if !value.starts_with('/') {
        validation.push(FieldError::RoutePathPrefix {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    if value.contains('?') {
        validation.push(FieldError::RoutePathQuery {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    validation
}

/// Validate a domain name
/// Only checks that the name has at least two labels
pub fn validate_domain_name(value: &str, key: &str) -> Validation {
    if value.contains('.') {
        return Validation::ok();
    }
    Validation::error(FieldError::DomainName {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Validate free-form notes
pub fn validate_notes(value: &str, key: &str) -> Validation {
    if value.len() > MAX_NOTES_LENGTH {
        return Validation::error(FieldError::NotesTooLong {
            key: key.to_string(),
            max: MAX_NOTES_LENGTH,
        });
    }
    Validation::ok()
}
