//! `QName` (qualified name) handling.
//!
//! A `QName` pairs a namespace with a local name. Elements and attributes both
//! carry one. An empty namespace means "no namespace". When a tree is loaded
//! from text the namespace holds the prefix as written in the source, which is
//! also what the serializer writes back in front of the local name.
//!
//! See <https://www.w3.org/TR/xml-names/#NT-QName>

use std::fmt;

/// The namespace wildcard accepted by search and attribute lookup.
///
/// Matches any namespace, including the empty one.
pub const ANY_NAMESPACE: &str = "*";

/// A namespace + local-name pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace (or source prefix). Empty means no namespace.
    pub space: String,
    /// Local part of the name.
    pub local: String,
}

impl QName {
    /// Creates a name in the given namespace.
    #[must_use]
    pub fn new(space: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            space: space.into(),
            local: local.into(),
        }
    }

    /// Creates a name with no namespace.
    #[must_use]
    pub fn local(local: impl Into<String>) -> Self {
        Self::new(String::new(), local)
    }

    /// Builds a name from its `prefix:local` text form.
    ///
    /// ```
    /// use xmlx::util::qname::QName;
    ///
    /// assert_eq!(QName::parse("svg:rect"), QName::new("svg", "rect"));
    /// assert_eq!(QName::parse("div"), QName::local("div"));
    /// ```
    #[must_use]
    pub fn parse(qname: &str) -> Self {
        let (prefix, local) = split_qname(qname);
        Self::new(prefix.unwrap_or_default(), local)
    }

    /// Returns `true` if this name is selected by `namespace` and `local`.
    ///
    /// `namespace` may be [`ANY_NAMESPACE`]. The local name must match exactly.
    #[must_use]
    pub fn matches(&self, namespace: &str, local: &str) -> bool {
        (namespace == ANY_NAMESPACE || namespace == self.space) && local == self.local
    }

    /// Returns `true` if the name carries a namespace.
    #[must_use]
    pub fn has_space(&self) -> bool {
        !self.space.is_empty()
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_space() {
            write!(f, "{}:{}", self.space, self.local)
        } else {
            f.write_str(&self.local)
        }
    }
}

/// Splits a `QName` into its prefix and local name parts.
///
/// Returns `(Some(prefix), localname)` if the name contains a colon,
/// or `(None, localname)` if it does not. Only the first colon splits.
#[must_use]
pub fn split_qname(qname: &str) -> (Option<&str>, &str) {
    match qname.find(':') {
        Some(pos) => (Some(&qname[..pos]), &qname[pos + 1..]),
        None => (None, qname),
    }
}
