//! Mapping provider trait invoked by the host during OIDC login.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ConfigError, MappingResult};
use crate::types::{Token, UserAttributes, UserInfo};

/// A provider that turns upstream claims into local user attributes.
///
/// ## Lifecycle
///
/// 1. `parse_config()` - called once at startup with the raw provider options
/// 2. the host builds the provider from the parsed config
/// 3. `get_remote_user_id()` - called on every login to find an existing link
/// 4. `map_user_attributes()` - called when a new user must be registered,
///    again with an increasing `failures` count while the derived local-part
///    is unusable
/// 5. `get_extra_attributes()` - called once the user is logged in
///
/// ## Implementation Notes
///
/// - Providers are shared between concurrent logins (Send + Sync)
/// - The async methods follow the host's calling convention; they may
///   complete without ever suspending
#[async_trait]
pub trait OidcMappingProvider: Send + Sync {
    /// Parsed configuration for this provider.
    type Config: Send + Sync;

    /// Validates the raw provider options.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] naming the offending option.
    fn parse_config(config: &Value) -> Result<Self::Config, ConfigError>
    where
        Self: Sized;

    /// Returns the stable key identifying the user at the upstream provider.
    fn get_remote_user_id(&self, userinfo: &UserInfo) -> MappingResult<String>;

    /// Derives the attributes of a new local user.
    ///
    /// `failures` counts previous attempts for this login whose local-part
    /// was rejected by the host.
    async fn map_user_attributes(
        &self,
        userinfo: &UserInfo,
        token: &Token,
        failures: u32,
    ) -> MappingResult<UserAttributes>;

    /// Returns provider-specific attributes handed to the host after login.
    async fn get_extra_attributes(
        &self,
        _userinfo: &UserInfo,
        _token: &Token,
    ) -> MappingResult<BTreeMap<String, String>> {
        Ok(BTreeMap::new())
    }
}
