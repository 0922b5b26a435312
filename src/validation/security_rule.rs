//! # Security Group Rule Validation
//!
//! Direction, ether type and protocol of a security group rule are closed
//! sets. Each is an enum implementing [`ClosedSet`], and a single generic
//! [`validate_member`] checks raw strings against any of them.

use std::fmt;

use super::{FieldError, Validation};

/// A fixed set of string values a field may take
pub trait ClosedSet: Copy + 'static {
    /// What the set describes, used in error messages
    const DESCRIPTION: &'static str;

    /// Every member, in the order they are listed to users
    const VARIANTS: &'static [Self];

    /// Wire spelling of this member
    fn as_str(self) -> &'static str;

    /// Exact, case-sensitive lookup of a wire spelling
    fn parse(value: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
    }

    /// Comma-separated wire spellings of every member
    fn allowed() -> String {
        Self::VARIANTS
            .iter()
            .map(|variant| variant.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Validate that `value` is the wire spelling of a member of `T`
pub fn validate_member<T: ClosedSet>(value: &str, key: &str) -> Validation {
    if T::parse(value).is_some() {
        return Validation::ok();
    }
    Validation::error(FieldError::InvalidMember {
        key: key.to_string(),
        kind: T::DESCRIPTION,
        value: value.to_string(),
        allowed: T::allowed(),
    })
}

/// Traffic direction of a security group rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleDirection {
    Ingress,
    Egress,
}

impl ClosedSet for RuleDirection {
    const DESCRIPTION: &'static str = "security group rule direction";
    const VARIANTS: &'static [Self] = &[RuleDirection::Ingress, RuleDirection::Egress];

    fn as_str(self) -> &'static str {
        match self {
            RuleDirection::Ingress => "ingress",
            RuleDirection::Egress => "egress",
        }
    }
}

/// IP version a security group rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EtherType {
    IPv4,
    IPv6,
}

impl ClosedSet for EtherType {
    const DESCRIPTION: &'static str = "security group rule ethernet type";
    const VARIANTS: &'static [Self] = &[EtherType::IPv4, EtherType::IPv6];

    fn as_str(self) -> &'static str {
        match self {
            EtherType::IPv4 => "IPv4",
            EtherType::IPv6 => "IPv6",
        }
    }
}

/// Transport protocol matched by a security group rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleProtocol {
    Icmp,
    Tcp,
    Udp,
}

impl ClosedSet for RuleProtocol {
    const DESCRIPTION: &'static str = "security group rule protocol";
    const VARIANTS: &'static [Self] = &[RuleProtocol::Icmp, RuleProtocol::Tcp, RuleProtocol::Udp];

    fn as_str(self) -> &'static str {
        match self {
            RuleProtocol::Icmp => "icmp",
            RuleProtocol::Tcp => "tcp",
            RuleProtocol::Udp => "udp",
        }
    }
}

impl fmt::Display for RuleDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EtherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RuleProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a security group rule direction ("ingress" or "egress")
pub fn validate_security_rule_direction(value: &str, key: &str) -> Validation {
    validate_member::<RuleDirection>(value, key)
}

/// Validate a security group rule ether type ("IPv4" or "IPv6")
pub fn validate_security_rule_ether_type(value: &str, key: &str) -> Validation {
    validate_member::<EtherType>(value, key)
}

/// Validate a security group rule protocol ("icmp", "tcp" or "udp")
pub fn validate_security_rule_protocol(value: &str, key: &str) -> Validation {
    validate_member::<RuleProtocol>(value, key)
}
