use lbl_model::{FieldName, LabelCase};

/// Fallback text for a field without explicit or localized text.
pub trait Humanizer: Send + Sync {
    /// Must be deterministic and always succeed.
    fn humanize(&self, field: &FieldName) -> String;
}

/// Derives label text from the field name itself.
///
/// A trailing `_id` is dropped and underscores become spaces before the
/// configured [`LabelCase`] is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringHumanizer {
    case: LabelCase,
}

impl StringHumanizer {
    pub fn new(case: LabelCase) -> Self {
        Self { case }
    }

    pub fn case(&self) -> LabelCase {
        self.case
    }
}

impl Humanizer for StringHumanizer {
    fn humanize(&self, field: &FieldName) -> String {
        let name = field.as_str();
        let base = name
            .strip_suffix("_id")
            .filter(|s| !s.is_empty())
            .unwrap_or(name);
        let words = base.replace('_', " ");
        let words = words.trim();

        match self.case {
            LabelCase::Humanize => capitalize(&words.to_lowercase()),
            LabelCase::Titleize => words
                .split_whitespace()
                .map(|w| capitalize(&w.to_lowercase()))
                .collect::<Vec<_>>()
                .join(" "),
            LabelCase::Upcase => words.to_uppercase(),
            LabelCase::Downcase => words.to_lowercase(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
