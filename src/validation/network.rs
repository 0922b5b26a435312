//! # Network Validation
//!
//! IP addresses and CIDR blocks, IPv4 and IPv6 alike.

use std::net::IpAddr;

use ipnet::IpNet;

use super::{FieldError, Validation};

/// Validate a plain IP address (no prefix length)
pub fn validate_ip(value: &str, key: &str) -> Validation {
    if is_ip(value) {
        return Validation::ok();
    }
    Validation::error(FieldError::InvalidIp {
        key: key.to_string(),
    })
}

/// Validate a CIDR block
/// Host bits may be set ("10.0.0.1/24" is accepted)
pub fn validate_cidr(value: &str, key: &str) -> Validation {
    if is_cidr(value) {
        return Validation::ok();
    }
    Validation::error(FieldError::InvalidCidr {
        key: key.to_string(),
    })
}

/// Validate the remote side of a security group rule
/// Either a CIDR block or a single address; one combined error when neither parses
pub fn validate_remote_ip(value: &str, key: &str) -> Validation {
    if is_cidr(value) || is_ip(value) {
        return Validation::ok();
    }
    Validation::error(FieldError::InvalidRemoteIp {
        key: key.to_string(),
    })
}

fn is_ip(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}

fn is_cidr(value: &str) -> bool {
    value.parse::<IpNet>().is_ok()
}
