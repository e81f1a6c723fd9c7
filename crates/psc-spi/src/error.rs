//! Error types shared between the host and its mapping providers.
//!
//! Configuration errors are raised once at startup and must point at the
//! exact option that is malformed; mapping errors are raised per login.

use std::error::Error as StdError;

use thiserror::Error;

/// A provider configuration that cannot be accepted.
///
/// The `path` lists the keys leading to the offending option, e.g.
/// `["extra_attributes", "job"]`.
#[derive(Debug, Error)]
#[error("{message} (in {})", .path.join("."))]
pub struct ConfigError {
    message: String,
    path: Vec<String>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ConfigError {
    /// Creates a configuration error for the option at `path`.
    #[must_use]
    pub fn new<I, S>(message: impl Into<String>, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            message: message.into(),
            path: path.into_iter().map(Into::into).collect(),
            source: None,
        }
    }

    /// Attaches the underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error message without the path.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the path of the offending option.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }
}

/// Errors raised while mapping claims to user attributes.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A template could not be rendered against the claims.
    #[error("failed to render {template}: {message}")]
    Render {
        /// Name of the template (its configuration path).
        template: String,
        /// Engine error message.
        message: String,
    },
}

impl MappingError {
    /// Creates a render error.
    #[must_use]
    pub fn render(template: impl Into<String>, message: impl ToString) -> Self {
        Self::Render {
            template: template.into(),
            message: message.to_string(),
        }
    }

    /// Returns the name of the template involved, if any.
    #[must_use]
    pub fn template(&self) -> Option<&str> {
        match self {
            Self::Render { template, .. } => Some(template),
        }
    }
}

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;
