use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbolic name of a form field (`title`, `author_ids`, ...).
///
/// Opaque: no validation is applied. Used for humanization, localization keys
/// and as the binding target of a rendered label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FieldName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldName;

    #[test]
    fn display_and_as_str_agree() {
        let f = FieldName::new("author_ids");
        assert_eq!(f.as_str(), "author_ids");
        assert_eq!(f.to_string(), "author_ids");
    }

    #[test]
    fn serde_is_transparent() {
        let f: FieldName = serde_json::from_str(r#""title""#).unwrap();
        assert_eq!(f, FieldName::from("title"));
        assert_eq!(serde_json::to_string(&f).unwrap(), r#""title""#);
    }
}
