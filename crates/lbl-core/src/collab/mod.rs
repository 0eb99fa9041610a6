//! Collaborators the label pipeline calls into.
//!
//! Implementations are injected through [`crate::LabelContext`] as shared
//! handles. Concrete HTML implementations live in `lbl-html`.
mod humanizer;
pub use humanizer::{Humanizer, StringHumanizer};

mod localizer;
pub use localizer::{Localizer, LookupQuery, NoTranslations};

mod markup;
pub use markup::{BaseLabelRenderer, TagRenderer};

use std::sync::Arc;

pub type LocalizerHandle = Arc<dyn Localizer>;
pub type HumanizerHandle = Arc<dyn Humanizer>;
pub type BaseLabelHandle = Arc<dyn BaseLabelRenderer>;
pub type TagHandle = Arc<dyn TagRenderer>;

/// Create a localizer handle that never finds a translation.
#[inline]
pub fn no_translations() -> LocalizerHandle {
    Arc::new(NoTranslations)
}
