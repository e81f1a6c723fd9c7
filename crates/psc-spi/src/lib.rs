//! # psc-spi
//!
//! Plugin contract between an identity server and its OIDC mapping providers.
//!
//! The host performs the OpenID Connect exchange itself and hands the
//! resulting claims to a mapping provider, which derives the local user
//! identity from them.
//!
//! ## Design
//!
//! - [`OidcMappingProvider`] - the callbacks the host invokes during login
//! - [`UserInfo`] / [`Token`] - what the host passes in
//! - [`UserAttributes`] - what the provider hands back
//! - [`ConfigError`] - configuration failures, carrying the option path
//! - [`LocalpartSanitizer`] - the host's local-part normalization routine

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod localpart;
pub mod provider;
pub mod types;

pub use error::{ConfigError, MappingError, MappingResult};
pub use localpart::{LocalpartSanitizer, MxidLocalpartSanitizer};
pub use provider::OidcMappingProvider;
pub use types::{Token, UserAttributes, UserInfo};
