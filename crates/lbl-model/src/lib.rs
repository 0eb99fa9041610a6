mod domain;
pub use domain::{
    AS_SPAN_KEY, Attributes, BOOLEAN_ATTRIBUTES, CLASS_ATTR, DEFAULT_SPAN_CLASS, FOR_ATTR, FieldName, INPUT_NAME_KEY,
    Indicator, LABEL_HTML_KEY, LABEL_KEY, LABEL_PREFIX_KEY, LABELS_SCOPE, LabelCase, REQUIRED_KEY,
};

mod error;
pub use error::{ModelError, ModelResult};

mod options;
pub use options::{LabelArg, LabelHtml, LabelOptions, LabelText, RecognizedOptions, Requirement};
