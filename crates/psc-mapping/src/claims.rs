//! Optional-chaining access to nested claims.

use std::fmt;

use psc_spi::UserInfo;
use serde_json::Value;

/// One step of a [`ClaimPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Member of an object.
    Key(String),
    /// Element of an array.
    Index(usize),
}

/// Path to a value nested inside the claims.
///
/// Resolution stops with `None` at the first level that is absent or does
/// not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimPath {
    claim: String,
    segments: Vec<PathSegment>,
}

impl ClaimPath {
    /// Starts a path at a top-level claim.
    #[must_use]
    pub fn claim(name: impl Into<String>) -> Self {
        Self {
            claim: name.into(),
            segments: Vec::new(),
        }
    }

    /// Descends into an object member.
    #[must_use]
    pub fn key(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Key(name.into()));
        self
    }

    /// Descends into an array element.
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    /// Returns the value at this path, if every level is present.
    #[must_use]
    pub fn resolve<'a>(&self, userinfo: &'a UserInfo) -> Option<&'a Value> {
        let root = userinfo.get(&self.claim)?;
        self.segments
            .iter()
            .try_fold(root, |value, segment| match segment {
                PathSegment::Key(name) => value.get(name.as_str()),
                PathSegment::Index(index) => value.get(*index),
            })
    }

    /// Returns the string at this path, if present and a string.
    #[must_use]
    pub fn resolve_str<'a>(&self, userinfo: &'a UserInfo) -> Option<&'a str> {
        self.resolve(userinfo).and_then(Value::as_str)
    }
}

impl fmt::Display for ClaimPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.claim)?;
        for segment in &self.segments {
            match segment {
                PathSegment::Key(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// `SubjectRefPro.exercices[0].codeProfession`: profession of the first
/// practice declared in the national professional directory.
#[must_use]
pub fn profession_code_path() -> ClaimPath {
    ClaimPath::claim("SubjectRefPro")
        .key("exercices")
        .index(0)
        .key("codeProfession")
}

/// Returns the profession code of the user's first practice, if any.
///
/// An empty code is treated as absent.
#[must_use]
pub fn profession_code(userinfo: &UserInfo) -> Option<&str> {
    profession_code_path()
        .resolve_str(userinfo)
        .filter(|code| !code.is_empty())
}
