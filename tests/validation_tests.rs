//! # Validation Unit Tests
//!
//! Tests for every field validator through the public API.
//!
//! These tests verify:
//! - String length limits, route paths and domain names
//! - Port, instance, bandwidth, connection and weight ranges
//! - IP, CIDR and remote IP parsing
//! - Security group rule enumerations
//! - Archive path existence

use field_validators::{
    validate_allowed_string_value, validate_app_instance, validate_app_port,
    validate_app_zip_path, validate_cidr, validate_domain_name, validate_ip, validate_max_conn,
    validate_notes, validate_port_range, validate_public_bandwidth, validate_remote_ip,
    validate_route_path, validate_route_port, validate_security_rule_direction,
    validate_security_rule_ether_type, validate_security_rule_protocol, validate_service_tags,
    validate_weight, FieldError, IntValidateFn,
};

#[test]
fn test_validate_service_tags() {
    assert!(validate_service_tags("", "tags").is_valid());
    assert!(validate_service_tags(&"a".repeat(2048), "tags").is_valid());

    let validation = validate_service_tags(&"a".repeat(2049), "tags");
    assert_eq!(
        validation.messages(),
        vec![r#""tags" must contain tags whose maximum length is 2048 characters"#.to_string()]
    );
    assert!(validation.warnings.is_empty());
}

#[test]
fn test_validate_notes() {
    assert!(validate_notes(&"n".repeat(1000), "notes").is_valid());
    assert_eq!(validate_notes(&"n".repeat(1001), "notes").errors.len(), 1);
}

#[test]
fn test_validate_allowed_string_value() {
    let validate = validate_allowed_string_value(&["public", "private"]);

    for value in ["public", "private"] {
        assert!(
            validate(value, "visibility").is_valid(),
            "Value '{}' should be allowed",
            value
        );
    }

    for value in ["", "Public", "internal", " public"] {
        assert_eq!(
            validate(value, "visibility").errors.len(),
            1,
            "Value '{}' should be rejected",
            value
        );
    }
}

#[test]
fn test_validate_route_path_valid() {
    let max_path = format!("/{}", "a".repeat(127));
    let valid_paths = vec![
        "",   // Empty path is accepted by the API
        "/a", // Minimum length
        "/api/v1",
        "/with-dash_and.dot",
        &max_path, // Max length
    ];

    for path in valid_paths {
        assert!(
            validate_route_path(path, "path").is_valid(),
            "Path '{}' should be valid",
            path
        );
    }
}

#[test]
fn test_validate_route_path_invalid() {
    let too_long = format!("/{}", "a".repeat(128));
    let invalid_paths = vec![
        ("a", 2),                // Too short, no leading slash
        ("/", 1),                // Too short
        ("ab", 1),               // No leading slash
        ("/x?y", 1),             // Query marker
        ("api?x", 2),            // No leading slash, query marker
        (too_long.as_str(), 1),  // Too long
    ];

    for (path, expected) in invalid_paths {
        assert_eq!(
            validate_route_path(path, "path").errors.len(),
            expected,
            "Path '{}' should produce {} error(s)",
            path,
            expected
        );
    }
}

#[test]
fn test_validate_route_path_messages() {
    let validation = validate_route_path("a", "path");
    assert_eq!(
        validation.messages(),
        vec![
            r#""path" ("a") must contain from 2 to 128 characters"#.to_string(),
            r#""path" ("a") must start with a forward slash '/'"#.to_string(),
        ]
    );
}

#[test]
fn test_port_validators_share_bounds() {
    let validators: [(&str, IntValidateFn); 2] = [
        ("route port", validate_route_port),
        ("app port", validate_app_port),
    ];

    for (name, validate) in validators {
        for port in [1024, 8080, 65535] {
            assert!(validate(port, "port").is_valid(), "{name} {port} should be valid");
        }
        for port in [i64::MIN, -1, 0, 80, 1023, 65536, i64::MAX] {
            assert_eq!(
                validate(port, "port").errors.len(),
                1,
                "{name} {port} should be invalid"
            );
        }
    }
}

#[test]
fn test_validate_port_range_custom_bounds() {
    let validate = validate_port_range(1, 65535);
    assert!(validate(1, "listener_port").is_valid());
    assert!(validate(65535, "listener_port").is_valid());

    let validation = validate(0, "listener_port");
    assert_eq!(
        validation.errors,
        vec![FieldError::OutOfRange {
            key: "listener_port".to_string(),
            value: 0,
            start: 1,
            end: 65535,
        }]
    );
}

#[test]
fn test_validate_domain_name() {
    assert!(validate_domain_name("example.com", "domain").is_valid());
    assert!(validate_domain_name("foo.example.com", "domain").is_valid());
    assert!(validate_domain_name(".", "domain").is_valid());

    for value in ["example", "", "localhost"] {
        assert_eq!(
            validate_domain_name(value, "domain").errors.len(),
            1,
            "Domain '{}' should be invalid",
            value
        );
    }
}

#[test]
fn test_validate_app_instance_accepts_zero() {
    assert!(validate_app_instance(0, "instances").is_valid());
    assert!(validate_app_instance(3, "instances").is_valid());

    let validation = validate_app_instance(-1, "instances");
    assert_eq!(
        validation.messages(),
        vec![r#""instances" (-1) must be greater than 0"#.to_string()]
    );
}

#[test]
fn test_validate_public_bandwidth() {
    for bandwidth in [250, 1000, 5000, 10000, 20000] {
        assert!(
            validate_public_bandwidth(bandwidth, "bandwidth").is_valid(),
            "Bandwidth {} should be valid",
            bandwidth
        );
    }

    for bandwidth in [0, 1, 249, 251, 500, 20001, i64::MAX, -1, -250, i64::MIN] {
        assert_eq!(
            validate_public_bandwidth(bandwidth, "bandwidth").errors.len(),
            1,
            "Bandwidth {} should produce exactly one error",
            bandwidth
        );
    }
}

#[test]
fn test_validate_max_conn() {
    for value in [1, 32000, 64000] {
        assert!(validate_max_conn(value, "max_conn").is_valid());
    }
    for value in [0, -5, 64001] {
        let validation = validate_max_conn(value, "max_conn");
        assert_eq!(
            validation.messages(),
            vec![r#""max_conn" must be between 1 and 64000"#.to_string()]
        );
    }
}

#[test]
fn test_validate_weight() {
    for value in [0, 50, 100] {
        assert!(validate_weight(value, "weight").is_valid());
    }
    for value in [-1, 101] {
        assert_eq!(validate_weight(value, "weight").errors.len(), 1);
    }
}

#[test]
fn test_validate_security_rule_enumerations() {
    assert!(validate_security_rule_direction("ingress", "direction").is_valid());
    assert!(validate_security_rule_direction("egress", "direction").is_valid());
    assert!(!validate_security_rule_direction("Ingress", "direction").is_valid());
    assert!(!validate_security_rule_direction("both", "direction").is_valid());

    assert!(validate_security_rule_ether_type("IPv4", "ether_type").is_valid());
    assert!(validate_security_rule_ether_type("IPv6", "ether_type").is_valid());
    assert!(!validate_security_rule_ether_type("ipv6", "ether_type").is_valid());

    for protocol in ["icmp", "tcp", "udp"] {
        assert!(validate_security_rule_protocol(protocol, "protocol").is_valid());
    }
    for protocol in ["", "all", "TCP"] {
        assert_eq!(
            validate_security_rule_protocol(protocol, "protocol").errors.len(),
            1
        );
    }
}

#[test]
fn test_validate_security_rule_direction_message() {
    let validation = validate_security_rule_direction("inbound", "direction");
    assert_eq!(
        validation.messages(),
        vec![r#""direction" contains an invalid security group rule direction "inbound". Valid types are "ingress,egress"."#.to_string()]
    );
}

#[test]
fn test_validate_ip() {
    for address in ["10.0.0.1", "0.0.0.0", "255.255.255.255", "::", "fe80::1"] {
        assert!(
            validate_ip(address, "ip").is_valid(),
            "Address '{}' should be valid",
            address
        );
    }

    for address in ["not-an-ip", "", "10.0.0", "10.0.0.256", "10.0.0.0/24"] {
        assert_eq!(
            validate_ip(address, "ip").messages(),
            vec![r#""ip" must be a valid ip address"#.to_string()],
            "Address '{}' should be invalid",
            address
        );
    }
}

#[test]
fn test_validate_cidr() {
    for block in ["10.0.0.0/24", "0.0.0.0/0", "192.168.1.7/32", "2001:db8::/48"] {
        assert!(
            validate_cidr(block, "cidr").is_valid(),
            "Block '{}' should be valid",
            block
        );
    }

    for block in ["10.0.0.0", "10.0.0.0/", "10.0.0.0/40", "garbage"] {
        assert_eq!(
            validate_cidr(block, "cidr").errors.len(),
            1,
            "Block '{}' should be invalid",
            block
        );
    }
}

#[test]
fn test_validate_remote_ip() {
    assert!(validate_remote_ip("10.0.0.0/24", "remote").is_valid());
    assert!(validate_remote_ip("10.0.0.1", "remote").is_valid());
    assert!(validate_remote_ip("2001:db8::1", "remote").is_valid());

    let validation = validate_remote_ip("garbage", "remote");
    assert_eq!(
        validation.messages(),
        vec![r#""remote" must be a valid remote ip address (cidr or ip)"#.to_string()]
    );
}

#[test]
fn test_validate_app_zip_path_missing_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.zip");
    let missing = missing.to_string_lossy();

    let validation = validate_app_zip_path(&missing, "app_path");
    assert_eq!(
        validation.errors,
        vec![FieldError::PathNotFound {
            key: "app_path".to_string(),
            path: missing.to_string(),
        }]
    );
}

#[test]
fn test_validate_app_zip_path_existing_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().to_string_lossy();
    assert!(validate_app_zip_path(&path, "app_path").is_valid());
}

#[test]
fn test_validators_are_thread_safe() {
    let validate = validate_allowed_string_value(&["a"]);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validate = validate.clone();
            std::thread::spawn(move || {
                validate("a", "k").is_valid()
                    && validate_weight(i, "k").is_valid()
                    && validate_ip("10.0.0.1", "k").is_valid()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
