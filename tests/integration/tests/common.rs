//! Common test utilities and fixtures.

use psc_mapping::ClaimMapper;
use psc_spi::OidcMappingProvider;
use serde_json::{json, Value};

/// Provider options used by the ProSanté Connect deployment.
pub fn deployment_options() -> Value {
    json!({
        "subject_template": "{{ user.sub }}",
        "picture_template": "{{ user.picture }}",
        "localpart_template": "{{ user.preferred_username }}",
        "display_name_template": "{{ user.given_name }} {{ user.family_name }}",
        "email_template": "{{ user.email }}",
        "extra_attributes": {},
        "confirm_localpart": false,
    })
}

/// Builds a mapper the way the host does at startup.
pub fn mapper_from(options: &Value) -> anyhow::Result<ClaimMapper> {
    // Initialize tracing for tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter("psc_mapping=debug")
        .with_test_writer()
        .try_init();

    let config = ClaimMapper::parse_config(options)?;
    tracing::info!("Claim mapper configured");
    Ok(ClaimMapper::new(config))
}
