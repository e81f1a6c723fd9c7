//! Mapping provider configuration.
//!
//! Options, all optional:
//!
//! | Option | Type | Default |
//! |---|---|---|
//! | `subject_template` / `subject_claim` | template / claim name | claim `sub` |
//! | `picture_template` / `picture_claim` | template / claim name | claim `picture` |
//! | `localpart_template` | template | unset |
//! | `display_name_template` | template | unset |
//! | `email_template` | template | unset |
//! | `extra_attributes` | mapping of name to template | empty |
//! | `confirm_localpart` | boolean | `false` |
//! | `default_display_name_suffix` | string | unset |
//!
//! A `null` value is the same as leaving the option out.

use std::collections::BTreeMap;

use psc_spi::ConfigError;
use serde_json::{Map, Value};

use crate::template::{TemplateEngine, TemplateRef};

/// Parsed, compiled mapping configuration.
///
/// Built once when the provider is loaded and shared by every login.
#[derive(Debug, Clone)]
pub struct ClaimMapperConfig {
    engine: TemplateEngine,
    subject_template: TemplateRef,
    picture_template: TemplateRef,
    localpart_template: Option<TemplateRef>,
    display_name_template: Option<TemplateRef>,
    email_template: Option<TemplateRef>,
    extra_attributes: BTreeMap<String, TemplateRef>,
    confirm_localpart: bool,
    default_display_name_suffix: Option<String>,
}

impl ClaimMapperConfig {
    /// Parses and compiles the raw provider options.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] carrying the path of the first option that
    /// has the wrong type or does not compile.
    pub fn parse(config: &Value) -> Result<Self, ConfigError> {
        let empty = Map::new();
        let options = match config {
            Value::Object(options) => options,
            Value::Null => &empty,
            _ => return Err(ConfigError::new("must be a mapping", Vec::<String>::new())),
        };

        let mut parser = OptionParser {
            options,
            engine: TemplateEngine::new(),
        };

        let subject_template = parser.template_or_claim("subject", "sub")?;
        let picture_template = parser.template_or_claim("picture", "picture")?;
        let localpart_template = parser.optional_template("localpart_template")?;
        let display_name_template = parser.optional_template("display_name_template")?;
        let email_template = parser.optional_template("email_template")?;
        let extra_attributes = parser.extra_attributes()?;
        let confirm_localpart = parser.boolean("confirm_localpart")?;
        let default_display_name_suffix = parser
            .string("default_display_name_suffix")?
            .map(str::to_string);

        tracing::debug!(
            localpart = localpart_template.is_some(),
            display_name = display_name_template.is_some(),
            email = email_template.is_some(),
            extra_attributes = extra_attributes.len(),
            confirm_localpart,
            "Parsed claim mapping configuration"
        );

        Ok(Self {
            engine: parser.engine,
            subject_template,
            picture_template,
            localpart_template,
            display_name_template,
            email_template,
            extra_attributes,
            confirm_localpart,
            default_display_name_suffix,
        })
    }

    /// Returns the engine holding the compiled templates.
    #[must_use]
    pub const fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    /// Template producing the remote user ID.
    #[must_use]
    pub const fn subject_template(&self) -> &TemplateRef {
        &self.subject_template
    }

    /// Template producing the avatar URL.
    #[must_use]
    pub const fn picture_template(&self) -> &TemplateRef {
        &self.picture_template
    }

    /// Template producing the local-part, if configured.
    #[must_use]
    pub const fn localpart_template(&self) -> Option<&TemplateRef> {
        self.localpart_template.as_ref()
    }

    /// Template producing the display name, if configured.
    #[must_use]
    pub const fn display_name_template(&self) -> Option<&TemplateRef> {
        self.display_name_template.as_ref()
    }

    /// Template producing the email address, if configured.
    #[must_use]
    pub const fn email_template(&self) -> Option<&TemplateRef> {
        self.email_template.as_ref()
    }

    /// Templates for provider-specific attributes, by attribute name.
    #[must_use]
    pub const fn extra_attributes(&self) -> &BTreeMap<String, TemplateRef> {
        &self.extra_attributes
    }

    /// Whether the host should ask users to confirm their local-part.
    #[must_use]
    pub const fn confirm_localpart(&self) -> bool {
        self.confirm_localpart
    }

    /// Suffix for display names of users without a profession code.
    #[must_use]
    pub fn default_display_name_suffix(&self) -> Option<&str> {
        self.default_display_name_suffix.as_deref()
    }
}

/// Template substituting the value of a single claim.
fn claim_template(claim: &str) -> String {
    format!("{{{{ user[{}] }}}}", Value::from(claim))
}

struct OptionParser<'a> {
    options: &'a Map<String, Value>,
    engine: TemplateEngine,
}

impl<'a> OptionParser<'a> {
    fn option(&self, name: &str) -> Option<&'a Value> {
        self.options.get(name).filter(|value| !value.is_null())
    }

    fn string(&self, name: &str) -> Result<Option<&'a str>, ConfigError> {
        match self.option(name) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.as_str())),
            Some(_) => Err(ConfigError::new("must be a string", [name])),
        }
    }

    fn boolean(&self, name: &str) -> Result<bool, ConfigError> {
        match self.option(name) {
            None => Ok(false),
            Some(Value::Bool(value)) => Ok(*value),
            Some(_) => Err(ConfigError::new("must be a boolean", [name])),
        }
    }

    fn compile(&mut self, path: &[&str], source: &str) -> Result<TemplateRef, ConfigError> {
        self.engine.compile(path.join("."), source).map_err(|e| {
            ConfigError::new("invalid template", path.iter().copied()).with_source(e)
        })
    }

    /// `<option>_template`, else a template reading `<option>_claim`, else
    /// a template reading `default_claim`.
    fn template_or_claim(
        &mut self,
        option: &str,
        default_claim: &str,
    ) -> Result<TemplateRef, ConfigError> {
        let template_option = format!("{option}_template");
        let source = match self.string(&template_option)? {
            Some(source) if !source.is_empty() => source.to_string(),
            _ => {
                let claim = self.string(&format!("{option}_claim"))?;
                claim_template(claim.unwrap_or(default_claim))
            }
        };
        self.compile(&[template_option.as_str()], &source)
    }

    fn optional_template(&mut self, option: &str) -> Result<Option<TemplateRef>, ConfigError> {
        match self.string(option)? {
            Some(source) => self.compile(&[option], source).map(Some),
            None => Ok(None),
        }
    }

    fn extra_attributes(&mut self) -> Result<BTreeMap<String, TemplateRef>, ConfigError> {
        let mut templates = BTreeMap::new();
        let Some(value) = self.option("extra_attributes") else {
            return Ok(templates);
        };
        let Value::Object(attributes) = value else {
            return Err(ConfigError::new("must be a mapping", ["extra_attributes"]));
        };

        for (name, source) in attributes {
            let Value::String(source) = source else {
                return Err(ConfigError::new(
                    "must be a string",
                    ["extra_attributes", name.as_str()],
                ));
            };
            let template = self.compile(&["extra_attributes", name.as_str()], source)?;
            templates.insert(name.clone(), template);
        }

        Ok(templates)
    }
}
