mod attributes;
pub use attributes::Attributes;

mod case;
pub use case::LabelCase;

mod constants;
pub use constants::{
    AS_SPAN_KEY, BOOLEAN_ATTRIBUTES, CLASS_ATTR, DEFAULT_SPAN_CLASS, FOR_ATTR, INPUT_NAME_KEY, LABEL_HTML_KEY,
    LABEL_KEY, LABEL_PREFIX_KEY, LABELS_SCOPE, REQUIRED_KEY,
};

mod field;
pub use field::FieldName;

mod indicator;
pub use indicator::Indicator;
