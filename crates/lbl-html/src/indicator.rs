use std::sync::Arc;

use lbl_model::Indicator;

use crate::{catalog::CatalogLocalizer, escape::escape_html};

/// Catalog key for the title of the required marker.
const REQUIRED_TITLE_KEY: &str = "required";

/// `<abbr title="…">*</abbr>` with the title looked up at render time.
///
/// The title comes from the catalog key `required`, falling back to
/// `"required"`.
pub fn required_abbr(catalog: Arc<CatalogLocalizer>) -> Indicator {
    Indicator::deferred(move || {
        let title = catalog
            .get(REQUIRED_TITLE_KEY)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("required");
        format!(r#"<abbr title="{}">*</abbr>"#, escape_html(title))
    })
}
