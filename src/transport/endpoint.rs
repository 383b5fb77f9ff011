//! Function endpoint addresses.

use std::fmt;

/// Fully qualified URL of one remote function.
///
/// Always passed explicitly; nothing here reads shared configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    /// `<base>/<archive>/<function>`
    pub fn new(base: &str, archive: &str, function: &str) -> Self {
        Self(format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            archive,
            function
        ))
    }

    /// Use a caller-supplied URL verbatim
    pub fn from_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
