//! # psc-mapping
//!
//! OIDC mapping provider for ProSanté Connect.
//!
//! Derives a local user (remote ID, local-part, display name, email, avatar)
//! from the claims of an OpenID Connect login, using Jinja templates from
//! the provider configuration. Health professionals get their profession
//! appended to their display name.
//!
//! ## Example
//!
//! ```rust,ignore
//! use psc_mapping::ClaimMapper;
//! use psc_spi::{OidcMappingProvider, Token, UserInfo};
//!
//! let config = ClaimMapper::parse_config(&serde_json::json!({
//!     "localpart_template": "{{ user.preferred_username }}",
//!     "display_name_template": "{{ user.given_name }} {{ user.family_name }}",
//! }))?;
//! let mapper = ClaimMapper::new(config);
//!
//! let attributes = mapper
//!     .map_user_attributes(&userinfo, &Token::default(), 0)
//!     .await?;
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod claims;
pub mod config;
pub mod mapper;
pub mod profession;
pub mod template;

pub use claims::{profession_code, ClaimPath};
pub use config::ClaimMapperConfig;
pub use mapper::ClaimMapper;
pub use profession::profession_label;
pub use template::{TemplateEngine, TemplateRef};
