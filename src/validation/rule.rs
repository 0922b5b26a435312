//! # Field Rules
//!
//! Names every validator as data so a field can be bound to a rule in a
//! manifest and checked without the caller knowing the function.
//!
//! ```yaml
//! rule: { type: portRange, start: 1, end: 65535 }
//! value: 8080
//! ```

use serde::{Deserialize, Serialize};

use super::{
    network, paths, ranges, security_rule, strings, FieldError, IntValidateFn, StringValidateFn,
    Validation,
};

/// A raw configuration value: the schema framework hands over either a
/// string or an integer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Str(String),
}

impl FieldValue {
    /// Name of the value's type, as used in mismatch messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "integer",
            FieldValue::Str(_) => "string",
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

/// Which validator applies to a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum FieldRule {
    ServiceTags,
    AllowedValue { values: Vec<String> },
    RoutePath,
    RoutePort,
    AppPort,
    PortRange { start: i64, end: i64 },
    DomainName,
    AppInstance,
    AppZipPath,
    Notes,
    PublicBandwidth,
    MaxConn,
    Weight,
    SecurityRuleDirection,
    SecurityRuleEtherType,
    Ip,
    Cidr,
    RemoteIp,
    SecurityRuleProtocol,
}

/// Every rule name accepted in the `type` tag, in declaration order
pub const RULE_NAMES: &[&str] = &[
    "serviceTags",
    "allowedValue",
    "routePath",
    "routePort",
    "appPort",
    "portRange",
    "domainName",
    "appInstance",
    "appZipPath",
    "notes",
    "publicBandwidth",
    "maxConn",
    "weight",
    "securityRuleDirection",
    "securityRuleEtherType",
    "ip",
    "cidr",
    "remoteIp",
    "securityRuleProtocol",
];

enum Check<'a> {
    Str(StringValidateFn),
    Int(IntValidateFn),
    Allowed(&'a [String]),
    Range(i64, i64),
}

impl FieldRule {
    /// Rule name as spelled in the `type` tag
    pub fn name(&self) -> &'static str {
        match self {
            FieldRule::ServiceTags => "serviceTags",
            FieldRule::AllowedValue { .. } => "allowedValue",
            FieldRule::RoutePath => "routePath",
            FieldRule::RoutePort => "routePort",
            FieldRule::AppPort => "appPort",
            FieldRule::PortRange { .. } => "portRange",
            FieldRule::DomainName => "domainName",
            FieldRule::AppInstance => "appInstance",
            FieldRule::AppZipPath => "appZipPath",
            FieldRule::Notes => "notes",
            FieldRule::PublicBandwidth => "publicBandwidth",
            FieldRule::MaxConn => "maxConn",
            FieldRule::Weight => "weight",
            FieldRule::SecurityRuleDirection => "securityRuleDirection",
            FieldRule::SecurityRuleEtherType => "securityRuleEtherType",
            FieldRule::Ip => "ip",
            FieldRule::Cidr => "cidr",
            FieldRule::RemoteIp => "remoteIp",
            FieldRule::SecurityRuleProtocol => "securityRuleProtocol",
        }
    }

    fn check(&self) -> Check<'_> {
        match self {
            FieldRule::ServiceTags => Check::Str(strings::validate_service_tags),
            FieldRule::AllowedValue { values } => Check::Allowed(values),
            FieldRule::RoutePath => Check::Str(strings::validate_route_path),
            FieldRule::RoutePort => Check::Int(ranges::validate_route_port),
            FieldRule::AppPort => Check::Int(ranges::validate_app_port),
            FieldRule::PortRange { start, end } => Check::Range(*start, *end),
            FieldRule::DomainName => Check::Str(strings::validate_domain_name),
            FieldRule::AppInstance => Check::Int(ranges::validate_app_instance),
            FieldRule::AppZipPath => Check::Str(paths::validate_app_zip_path),
            FieldRule::Notes => Check::Str(strings::validate_notes),
            FieldRule::PublicBandwidth => Check::Int(ranges::validate_public_bandwidth),
            FieldRule::MaxConn => Check::Int(ranges::validate_max_conn),
            FieldRule::Weight => Check::Int(ranges::validate_weight),
            FieldRule::SecurityRuleDirection => {
                Check::Str(security_rule::validate_security_rule_direction)
            }
            FieldRule::SecurityRuleEtherType => {
                Check::Str(security_rule::validate_security_rule_ether_type)
            }
            FieldRule::Ip => Check::Str(network::validate_ip),
            FieldRule::Cidr => Check::Str(network::validate_cidr),
            FieldRule::RemoteIp => Check::Str(network::validate_remote_ip),
            FieldRule::SecurityRuleProtocol => {
                Check::Str(security_rule::validate_security_rule_protocol)
            }
        }
    }

    /// Type of value this rule expects
    pub fn expected_type(&self) -> &'static str {
        match self.check() {
            Check::Str(_) | Check::Allowed(_) => "string",
            Check::Int(_) | Check::Range(..) => "integer",
        }
    }

    /// Run the rule's validator against a raw value
    ///
    /// A value of the wrong type yields a single [`FieldError::TypeMismatch`].
    pub fn validate(&self, value: &FieldValue, key: &str) -> Validation {
        match (self.check(), value) {
            (Check::Str(validate), FieldValue::Str(s)) => validate(s, key),
            (Check::Allowed(values), FieldValue::Str(s)) => strings::check_allowed(values, s, key),
            (Check::Int(validate), FieldValue::Int(n)) => validate(*n, key),
            (Check::Range(start, end), FieldValue::Int(n)) => {
                ranges::validate_port_range(start, end)(*n, key)
            }
            (_, value) => Validation::error(FieldError::TypeMismatch {
                key: key.to_string(),
                expected: self.expected_type(),
                found: value.type_name(),
            }),
        }
    }
}
