mod arg;
pub use arg::LabelArg;

mod label_html;
pub use label_html::LabelHtml;

mod label_options;
pub use label_options::{LabelOptions, RecognizedOptions};

mod label_text;
pub use label_text::LabelText;

mod requirement;
pub use requirement::Requirement;
