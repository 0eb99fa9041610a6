use crate::LabelOptions;

/// Second argument of a `label` call: literal text, options, both, or neither.
#[derive(Debug, Clone, Default)]
pub enum LabelArg {
    #[default]
    None,
    Text(String),
    Options(LabelOptions),
    TextWithOptions(String, LabelOptions),
}

impl LabelArg {
    /// Split into the explicit text (if any) and the options (default if none).
    pub fn into_parts(self) -> (Option<String>, LabelOptions) {
        match self {
            LabelArg::None => (None, LabelOptions::default()),
            LabelArg::Text(text) => (Some(text), LabelOptions::default()),
            LabelArg::Options(options) => (None, options),
            LabelArg::TextWithOptions(text, options) => (Some(text), options),
        }
    }
}

impl From<&str> for LabelArg {
    fn from(s: &str) -> Self {
        LabelArg::Text(s.to_string())
    }
}

impl From<String> for LabelArg {
    fn from(s: String) -> Self {
        LabelArg::Text(s)
    }
}

impl From<LabelOptions> for LabelArg {
    fn from(options: LabelOptions) -> Self {
        LabelArg::Options(options)
    }
}

impl<S: Into<String>> From<(S, LabelOptions)> for LabelArg {
    fn from((text, options): (S, LabelOptions)) -> Self {
        LabelArg::TextWithOptions(text.into(), options)
    }
}

impl From<Option<LabelOptions>> for LabelArg {
    fn from(options: Option<LabelOptions>) -> Self {
        options.map_or(LabelArg::None, LabelArg::Options)
    }
}
