use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Casing applied when a field name is turned into label text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelCase {
    /// `"first_name"` → `"First name"`.
    #[default]
    Humanize,
    /// `"first_name"` → `"First Name"`.
    Titleize,
    /// `"first_name"` → `"FIRST NAME"`.
    Upcase,
    /// `"first_name"` → `"first name"`.
    Downcase,
}

impl FromStr for LabelCase {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "humanize" | "" => Ok(LabelCase::Humanize),
            "titleize" | "titlecase" => Ok(LabelCase::Titleize),
            "upcase" | "upper" => Ok(LabelCase::Upcase),
            "downcase" | "lower" => Ok(LabelCase::Downcase),
            other => Err(ModelError::UnknownLabelCase(other.to_string())),
        }
    }
}

impl fmt::Display for LabelCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LabelCase::Humanize => "humanize",
            LabelCase::Titleize => "titleize",
            LabelCase::Upcase => "upcase",
            LabelCase::Downcase => "downcase",
        };
        f.write_str(s)
    }
}
