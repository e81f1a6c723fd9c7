//! Template engine owned by a mapping configuration.
//!
//! Templates use Jinja syntax and see the login's claims as `user`, e.g.
//! `{{ user.given_name }} {{ user.family_name }}`. Each configuration builds
//! its own engine; templates are compiled when added and only rendered
//! afterwards.

use minijinja::{context, AutoEscape, Environment, Error, Output, State, UndefinedBehavior, Value};
use psc_spi::{MappingError, MappingResult, UserInfo};

/// Name of the filter turning an email address into a local-part.
pub const LOCALPART_FROM_EMAIL_FILTER: &str = "localpart_from_email";

/// Handle to a template compiled into a [`TemplateEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateRef {
    name: String,
}

impl TemplateRef {
    /// Returns the template name (the configuration path it came from).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A set of compiled claim templates.
///
/// Missing claims, attribute lookups on missing claims and `null` values all
/// render as the empty string. Output is never HTML-escaped.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    /// Creates an engine with no templates.
    #[must_use]
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_formatter(format_none_as_empty);
        env.add_filter(LOCALPART_FROM_EMAIL_FILTER, localpart_from_email);
        Self { env }
    }

    /// Compiles `source` and stores it under `name`.
    ///
    /// A template already stored under the same name is replaced.
    ///
    /// ## Errors
    ///
    /// Returns the engine's syntax error if `source` does not compile.
    pub fn compile(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<TemplateRef, Error> {
        let name = name.into();
        self.env.add_template_owned(name.clone(), source.into())?;
        Ok(TemplateRef { name })
    }

    /// Renders a compiled template with `userinfo` bound to `user`.
    ///
    /// The output is returned as rendered, surrounding whitespace included.
    pub fn render(&self, template: &TemplateRef, userinfo: &UserInfo) -> MappingResult<String> {
        self.env
            .get_template(&template.name)
            .and_then(|compiled| compiled.render(context! { user => userinfo }))
            .map_err(|e| MappingError::render(template.name.as_str(), e))
    }
}

fn format_none_as_empty(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), Error> {
    if value.is_none() {
        return Ok(());
    }
    minijinja::escape_formatter(out, state, value)
}

fn localpart_from_email(address: Value) -> String {
    if address.is_undefined() || address.is_none() {
        return String::new();
    }

    let address = address.to_string();
    match address.rsplit_once('@') {
        Some((localpart, _)) => localpart.to_string(),
        None => address,
    }
}
