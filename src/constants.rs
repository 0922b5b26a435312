//! # Constants
//!
//! Limits enforced by the field validators.
//!
//! These values mirror the constraints of the remote API. Changing one here
//! changes what every validator (and every manifest rule) accepts.

/// Maximum length of the tag list attached to a service instance (bytes)
pub const MAX_SERVICE_TAGS_LENGTH: usize = 2048;

/// Maximum length of free-form notes (bytes)
pub const MAX_NOTES_LENGTH: usize = 1000;

/// Minimum length of a non-empty route path (bytes)
pub const MIN_ROUTE_PATH_LENGTH: usize = 2;

/// Maximum length of a route path (bytes)
pub const MAX_ROUTE_PATH_LENGTH: usize = 128;

/// Lowest port a route or application may listen on
/// Ports below this are privileged and rejected by the platform
pub const MIN_APP_PORT: i64 = 1024;

/// Highest valid TCP/UDP port
pub const MAX_APP_PORT: i64 = 65535;

/// Public bandwidth allocations offered by the platform (GB)
pub const VALID_PUBLIC_BANDWIDTHS: &[i64] = &[250, 1000, 5000, 10000, 20000];

/// Minimum number of concurrent load balancer connections
pub const MIN_MAX_CONNECTIONS: i64 = 1;

/// Maximum number of concurrent load balancer connections
pub const MAX_MAX_CONNECTIONS: i64 = 64_000;

/// Minimum load balancer member weight
pub const MIN_WEIGHT: i64 = 0;

/// Maximum load balancer member weight
pub const MAX_WEIGHT: i64 = 100;
