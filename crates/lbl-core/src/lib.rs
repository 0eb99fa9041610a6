pub mod builder;
pub mod collab;
pub mod config;
pub mod context;
pub mod error;
pub mod indicator;
pub mod text;

pub use builder::LabelBuilder;
pub use collab::{
    BaseLabelHandle, BaseLabelRenderer, Humanizer, HumanizerHandle, Localizer, LocalizerHandle,
    LookupQuery, NoTranslations, StringHumanizer, TagHandle, TagRenderer,
};
pub use config::LabelConfig;
pub use context::{LabelContext, LookupScope};
pub use error::RenderError;
pub use indicator::{DEFAULT_REQUIRED_MARKER, IndicatorDefaults, resolve_requirement};

pub mod prelude {
    pub use crate::builder::LabelBuilder;
    pub use crate::context::LabelContext;
    pub use crate::error::RenderError;
    pub use lbl_model::{Attributes, FieldName, Indicator, LabelArg, LabelOptions};
}
