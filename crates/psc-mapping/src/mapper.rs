//! Claim mapper for ProSanté Connect logins.
//!
//! Renders the configured templates against the upstream claims and applies
//! the post-processing rules:
//!
//! - the local-part is sanitized and suffixed with the failure count
//! - the display name is suffixed with the user's profession label
//! - at most one email is produced

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use psc_spi::{
    ConfigError, LocalpartSanitizer, MappingResult, MxidLocalpartSanitizer, OidcMappingProvider,
    Token, UserAttributes, UserInfo,
};
use serde_json::Value;

use crate::claims::profession_code;
use crate::config::ClaimMapperConfig;
use crate::profession::profession_label;
use crate::template::TemplateRef;

/// Separator between a display name and the profession label.
pub const PROFESSION_SEPARATOR: &str = " - ";

/// Template-driven [`OidcMappingProvider`].
///
/// Cheap to clone; clones share the compiled configuration.
#[derive(Debug, Clone)]
pub struct ClaimMapper {
    config: Arc<ClaimMapperConfig>,
    sanitizer: Arc<dyn LocalpartSanitizer>,
}

impl ClaimMapper {
    /// Creates a mapper using the Matrix local-part rules.
    #[must_use]
    pub fn new(config: ClaimMapperConfig) -> Self {
        Self::with_sanitizer(config, MxidLocalpartSanitizer::new())
    }

    /// Creates a mapper using the host's local-part sanitizer.
    #[must_use]
    pub fn with_sanitizer(
        config: ClaimMapperConfig,
        sanitizer: impl LocalpartSanitizer + 'static,
    ) -> Self {
        Self {
            config: Arc::new(config),
            sanitizer: Arc::new(sanitizer),
        }
    }

    /// Returns the mapping configuration.
    #[must_use]
    pub fn config(&self) -> &ClaimMapperConfig {
        &self.config
    }

    fn render(&self, template: &TemplateRef, userinfo: &UserInfo) -> MappingResult<String> {
        let rendered = self.config.engine().render(template, userinfo)?;
        Ok(rendered.trim().to_string())
    }

    fn render_optional(
        &self,
        template: Option<&TemplateRef>,
        userinfo: &UserInfo,
    ) -> MappingResult<Option<String>> {
        template
            .map(|template| self.render(template, userinfo))
            .transpose()
    }

    fn localpart(&self, userinfo: &UserInfo, failures: u32) -> MappingResult<Option<String>> {
        let Some(rendered) = self.render_optional(self.config.localpart_template(), userinfo)?
        else {
            return Ok(None);
        };

        let mut localpart = self.sanitizer.sanitize(&rendered);
        // The previous candidate was taken or invalid; try another one.
        if failures > 0 {
            localpart.push_str(&failures.to_string());
        }
        Ok(Some(localpart))
    }

    fn display_name(&self, userinfo: &UserInfo) -> MappingResult<Option<String>> {
        let display_name = self
            .render_optional(self.config.display_name_template(), userinfo)?
            .filter(|name| !name.is_empty());

        Ok(display_name.map(|name| self.append_display_name_suffix(name, userinfo)))
    }

    fn append_display_name_suffix(&self, mut display_name: String, userinfo: &UserInfo) -> String {
        match profession_code(userinfo) {
            Some(code) => {
                display_name.push_str(PROFESSION_SEPARATOR);
                display_name.push_str(profession_label(code));
            }
            None => {
                if let Some(suffix) = self.config.default_display_name_suffix() {
                    display_name.push_str(suffix);
                }
            }
        }
        display_name
    }
}

#[async_trait]
impl OidcMappingProvider for ClaimMapper {
    type Config = ClaimMapperConfig;

    fn parse_config(config: &Value) -> Result<Self::Config, ConfigError> {
        ClaimMapperConfig::parse(config)
    }

    fn get_remote_user_id(&self, userinfo: &UserInfo) -> MappingResult<String> {
        self.render(self.config.subject_template(), userinfo)
    }

    async fn map_user_attributes(
        &self,
        userinfo: &UserInfo,
        _token: &Token,
        failures: u32,
    ) -> MappingResult<UserAttributes> {
        tracing::debug!(claims = userinfo.len(), failures, "Mapping user attributes");

        let localpart = self.localpart(userinfo, failures)?;
        let display_name = self.display_name(userinfo)?;
        let emails = self
            .render_optional(self.config.email_template(), userinfo)?
            .filter(|email| !email.is_empty())
            .into_iter()
            .collect();
        let picture = self.render(self.config.picture_template(), userinfo)?;

        Ok(UserAttributes {
            localpart,
            display_name,
            emails,
            picture,
            confirm_localpart: self.config.confirm_localpart(),
        })
    }

    async fn get_extra_attributes(
        &self,
        userinfo: &UserInfo,
        _token: &Token,
    ) -> MappingResult<BTreeMap<String, String>> {
        let mut extras = BTreeMap::new();

        for (name, template) in self.config.extra_attributes() {
            match self.render(template, userinfo) {
                Ok(value) => {
                    extras.insert(name.clone(), value);
                }
                Err(e) => {
                    tracing::warn!(attribute = %name, "Could not render extra attribute: {}", e);
                }
            }
        }

        Ok(extras)
    }
}
