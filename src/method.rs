//! Route method as a typed enum.
//!
//! A route module keys its exports by strings like `"GET"` or
//! `"POST create item"` — only the token before the first space matters.
//! This enum is the closed set of tokens ruta accepts; everything else is
//! skipped during resolution so modules can carry auxiliary exports
//! (constants, helpers) next to their handlers.
//!
//! `Middlewares` is a pseudo-method: it is mounted as a blanket handler via
//! [`ServerBackend::mount`](crate::ServerBackend::mount) instead of being
//! bound to one HTTP verb.

use std::fmt;
use std::str::FromStr;

/// A method token ruta knows how to register.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RouteMethod {
    Middlewares,
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl RouteMethod {
    /// Returns the lowercase token (e.g. `"get"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Middlewares => "middlewares",
            Self::Get         => "get",
            Self::Post        => "post",
            Self::Put         => "put",
            Self::Delete      => "delete",
            Self::Patch       => "patch",
            Self::Options     => "options",
            Self::Head        => "head",
        }
    }

    /// Derives the method from an export key.
    ///
    /// The key's first space-delimited token is matched case-insensitively
    /// against the closed set. An empty token defaults to `Get`; any unknown
    /// token yields `None` and the export is ignored by the resolver.
    ///
    /// ```rust
    /// use ruta::RouteMethod;
    ///
    /// assert_eq!(RouteMethod::from_export_key("POST create"), Some(RouteMethod::Post));
    /// assert_eq!(RouteMethod::from_export_key("TRACE foo"), None);
    /// ```
    pub fn from_export_key(key: &str) -> Option<Self> {
        let token = key.split(' ').next().unwrap_or("");
        if token.is_empty() {
            return Some(Self::Get);
        }
        token.parse().ok()
    }
}

/// Parses a method token, case-insensitively.
impl FromStr for RouteMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "middlewares" => Ok(Self::Middlewares),
            "get"         => Ok(Self::Get),
            "post"        => Ok(Self::Post),
            "put"         => Ok(Self::Put),
            "delete"      => Ok(Self::Delete),
            "patch"       => Ok(Self::Patch),
            "options"     => Ok(Self::Options),
            "head"        => Ok(Self::Head),
            _             => Err(()),
        }
    }
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_token_wins() {
        assert_eq!(RouteMethod::from_export_key("GET"), Some(RouteMethod::Get));
        assert_eq!(
            RouteMethod::from_export_key("DELETE remove a user"),
            Some(RouteMethod::Delete),
        );
    }

    #[test]
    fn token_is_case_insensitive() {
        assert_eq!(RouteMethod::from_export_key("pAtCh x"), Some(RouteMethod::Patch));
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert_eq!(RouteMethod::from_export_key("TRACE foo"), None);
        assert_eq!(RouteMethod::from_export_key("helper"), None);
    }

    #[test]
    fn empty_token_defaults_to_get() {
        assert_eq!(RouteMethod::from_export_key(""), Some(RouteMethod::Get));
        assert_eq!(RouteMethod::from_export_key(" trailing"), Some(RouteMethod::Get));
    }

    #[test]
    fn middlewares_is_a_valid_token() {
        assert_eq!(
            RouteMethod::from_export_key("middlewares"),
            Some(RouteMethod::Middlewares),
        );
    }
}
