//! HTML implementations of the label collaborators.
//!
//! [`HtmlLabels`] wires them into a ready-to-use [`lbl_core::LabelBuilder`].
mod error;
pub use error::HtmlError;

mod escape;
pub use escape::escape_html;

mod tag;
pub use tag::HtmlTagRenderer;

mod label;
pub use label::{HtmlLabelRenderer, dom_id};

mod catalog;
pub use catalog::CatalogLocalizer;

mod indicator;
pub use indicator::required_abbr;

mod labels;
pub use labels::{HtmlLabels, scope_for_object};
