//! Provider configuration integration tests.

use psc_mapping::ClaimMapper;
use psc_spi::OidcMappingProvider;
use serde_json::json;

use crate::common::deployment_options;

#[test]
fn test_deployment_options_parse() {
    let config = ClaimMapper::parse_config(&deployment_options()).unwrap();

    assert!(config.localpart_template().is_some());
    assert!(config.display_name_template().is_some());
    assert!(config.email_template().is_some());
    assert!(config.extra_attributes().is_empty());
    assert!(!config.confirm_localpart());
}

#[test]
fn test_errors_point_at_option() {
    let cases = [
        (json!({"localpart_template": "{{ user.preferred_username"}), vec!["localpart_template"]),
        (json!({"picture_template": "{% for %}"}), vec!["picture_template"]),
        (json!({"extra_attributes": "oops"}), vec!["extra_attributes"]),
        (
            json!({"extra_attributes": {"job": "{{ user.job "}}),
            vec!["extra_attributes", "job"],
        ),
        (json!({"confirm_localpart": 1}), vec!["confirm_localpart"]),
    ];

    for (options, path) in cases {
        let error = ClaimMapper::parse_config(&options).unwrap_err();
        assert_eq!(error.path(), path.as_slice(), "options: {options}");
    }
}

#[test]
fn test_error_message_includes_path() {
    let error = ClaimMapper::parse_config(&json!({"extra_attributes": {"job": 3}})).unwrap_err();
    assert_eq!(error.to_string(), "must be a string (in extra_attributes.job)");
}
