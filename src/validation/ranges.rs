//! # Range Validation
//!
//! Integer validators: ports, instance counts, bandwidth, connection limits
//! and weights. All bounds are inclusive.

use super::{FieldError, Validation};
use crate::constants::{
    MAX_APP_PORT, MAX_MAX_CONNECTIONS, MAX_WEIGHT, MIN_APP_PORT, MIN_MAX_CONNECTIONS, MIN_WEIGHT,
    VALID_PUBLIC_BANDWIDTHS,
};

/// Build a validator accepting integers in `start..=end`
pub fn validate_port_range(
    start: i64,
    end: i64,
) -> impl Fn(i64, &str) -> Validation + Copy + Send + Sync + 'static {
    move |value, key| {
        if (start..=end).contains(&value) {
            return Validation::ok();
        }
        Validation::error(FieldError::OutOfRange {
            key: key.to_string(),
            value,
            start,
            end,
        })
    }
}

/// Validate the port a route forwards to
pub fn validate_route_port(value: i64, key: &str) -> Validation {
    validate_port_range(MIN_APP_PORT, MAX_APP_PORT)(value, key)
}

/// Validate the port an application listens on
pub fn validate_app_port(value: i64, key: &str) -> Validation {
    validate_port_range(MIN_APP_PORT, MAX_APP_PORT)(value, key)
}

/// Validate an application instance count
/// Zero is accepted (a stopped application)
pub fn validate_app_instance(value: i64, key: &str) -> Validation {
    if value < 0 {
        return Validation::error(FieldError::NegativeInstances {
            key: key.to_string(),
            value,
        });
    }
    Validation::ok()
}

/// Validate a public bandwidth allocation
/// Negative values are rejected before the allocation list is consulted,
/// so a value never produces more than one error
pub fn validate_public_bandwidth(value: i64, key: &str) -> Validation {
    if value < 0 {
        return Validation::error(FieldError::NegativeBandwidth {
            key: key.to_string(),
            value,
        });
    }

    if VALID_PUBLIC_BANDWIDTHS.contains(&value) {
        return Validation::ok();
    }

    Validation::error(FieldError::UnsupportedBandwidth {
        key: key.to_string(),
        value,
        allowed: VALID_PUBLIC_BANDWIDTHS,
    })
}

/// Validate the maximum number of load balancer connections
pub fn validate_max_conn(value: i64, key: &str) -> Validation {
    check_between(value, MIN_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS, key)
}

/// Validate a load balancer member weight
pub fn validate_weight(value: i64, key: &str) -> Validation {
    check_between(value, MIN_WEIGHT, MAX_WEIGHT, key)
}

fn check_between(value: i64, min: i64, max: i64, key: &str) -> Validation {
    if (min..=max).contains(&value) {
        return Validation::ok();
    }
    Validation::error(FieldError::NotBetween {
        key: key.to_string(),
        min,
        max,
    })
}
