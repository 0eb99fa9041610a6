use std::sync::Arc;

use lbl_core::{LabelBuilder, LabelConfig, LabelContext, LookupScope};
use tracing::debug;

use crate::{
    catalog::CatalogLocalizer, indicator::required_abbr, label::HtmlLabelRenderer,
    tag::HtmlTagRenderer,
};

/// Builder for an HTML [`LabelBuilder`] bound to one form object.
#[derive(Debug, Clone, Default)]
pub struct HtmlLabels {
    object_name: Option<String>,
    action: Option<String>,
    catalog: Option<Arc<CatalogLocalizer>>,
    localized_required: bool,
    config: LabelConfig,
}

impl HtmlLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form object name, e.g. `post` or `post[author_attributes]`.
    ///
    /// Used for `for` ids and as the lookup scope.
    pub fn for_object(mut self, object_name: impl Into<String>) -> Self {
        self.object_name = Some(object_name.into());
        self
    }

    /// Current action (`new`, `edit`, ...) for scoped translations.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_catalog(mut self, catalog: Arc<CatalogLocalizer>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use [`required_abbr`] over the catalog even when the config names its
    /// own required indicator.
    ///
    /// Without this, the localized marker only replaces an unset one. Has no
    /// effect without a catalog.
    pub fn with_localized_required(mut self) -> Self {
        self.localized_required = true;
        self
    }

    pub fn with_config(mut self, config: LabelConfig) -> Self {
        self.config = config;
        self
    }

    /// Assemble the builder.
    ///
    /// With a catalog, the localized [`required_abbr`] marker is used unless
    /// the config names its own required indicator.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use lbl_html::{CatalogLocalizer, HtmlLabels};
    /// use lbl_model::{FieldName, LabelOptions};
    /// use serde_json::json;
    ///
    /// let catalog = CatalogLocalizer::from_json(&json!({
    ///     "labels": {"post": {"title": "Headline"}}
    /// }))
    /// .unwrap();
    /// let labels = HtmlLabels::new()
    ///     .for_object("post")
    ///     .with_catalog(Arc::new(catalog))
    ///     .build();
    ///
    /// let html = labels
    ///     .label(&FieldName::from("title"), LabelOptions::new().with_attr("class", "big"))
    ///     .unwrap();
    /// assert_eq!(html, r#"<label class="big" for="post_title">Headline</label>"#);
    /// ```
    pub fn build(self) -> LabelBuilder {
        let mut config = self.config;
        let base = match &self.object_name {
            Some(name) => HtmlLabelRenderer::for_object(name.as_str()),
            None => HtmlLabelRenderer::new(),
        };

        let mut scope = self
            .object_name
            .as_deref()
            .map(scope_for_object)
            .unwrap_or_default();
        scope.action = self.action;

        let mut ctx = LabelContext::new(Arc::new(base), Arc::new(HtmlTagRenderer));
        if let Some(catalog) = self.catalog {
            if self.localized_required || config.indicators.required.is_none() {
                config.indicators.required = Some(required_abbr(catalog.clone()));
            }
            ctx = ctx.with_localizer(catalog);
        }

        debug!(object = ?self.object_name, scope = ?scope, "html label builder ready");
        LabelBuilder::new(ctx.with_config(config).with_scope(scope))
    }
}

/// Lookup scope for a form object name.
///
/// `post[author_attributes]` yields model `post` and nested model
/// `author_attributes`; a plain name is the model.
pub fn scope_for_object(object_name: &str) -> LookupScope {
    if let Some(stripped) = object_name.strip_suffix(']') {
        if let Some(open) = stripped.rfind('[') {
            let (model, nested) = (&stripped[..open], &stripped[open + 1..]);
            if !model.is_empty() && !nested.is_empty() {
                return LookupScope::for_model(model).with_nested_model(nested);
            }
        }
    }
    LookupScope::for_model(object_name)
}

#[cfg(test)]
mod tests {
    use lbl_model::{Attributes, FieldName, Indicator, LabelArg, LabelOptions};
    use serde_json::json;

    use super::*;
    use lbl_core::IndicatorDefaults;

    fn catalog() -> Arc<CatalogLocalizer> {
        Arc::new(
            CatalogLocalizer::from_json(&json!({
                "required": "required field",
                "labels": {
                    "body": "Text",
                    "post": { "title": "Headline", "edit": { "title": "New headline" } },
                }
            }))
            .unwrap(),
        )
    }

    fn f(name: &str) -> FieldName {
        FieldName::from(name)
    }

    #[test]
    fn scope_for_plain_and_nested_names() {
        assert_eq!(scope_for_object("post"), LookupScope::for_model("post"));
        assert_eq!(
            scope_for_object("post[author_attributes]"),
            LookupScope::for_model("post").with_nested_model("author_attributes")
        );
        assert_eq!(
            scope_for_object("post[comments][0]"),
            LookupScope::for_model("post[comments]").with_nested_model("0")
        );
        assert_eq!(scope_for_object("[x]"), LookupScope::for_model("[x]"));
    }

    #[test]
    fn humanized_label_without_catalog() {
        let b = HtmlLabels::new().for_object("post").build();
        assert_eq!(
            b.label(&f("first_name"), LabelArg::None).unwrap(),
            r#"<label for="post_first_name">First name</label>"#
        );
    }

    #[test]
    fn catalog_translation_and_action_scope() {
        let b = HtmlLabels::new().for_object("post").with_catalog(catalog()).build();
        assert_eq!(
            b.label(&f("title"), LabelArg::None).unwrap(),
            r#"<label for="post_title">Headline</label>"#
        );
        assert_eq!(
            b.label(&f("body"), LabelArg::None).unwrap(),
            r#"<label for="post_body">Text</label>"#
        );

        let edit = HtmlLabels::new()
            .for_object("post")
            .with_action("edit")
            .with_catalog(catalog())
            .build();
        assert_eq!(
            edit.label(&f("title"), LabelArg::None).unwrap(),
            r#"<label for="post_title">New headline</label>"#
        );
    }

    #[test]
    fn explicit_text_beats_catalog() {
        let b = HtmlLabels::new().for_object("post").with_catalog(catalog()).build();
        assert_eq!(
            b.label(&f("title"), "Custom").unwrap(),
            r#"<label for="post_title">Custom</label>"#
        );
    }

    #[test]
    fn required_marker_uses_default_or_catalog_title() {
        let plain = HtmlLabels::new().for_object("post").build();
        assert_eq!(
            plain
                .label(&f("title"), LabelOptions::new().with_required(true))
                .unwrap(),
            r#"<label for="post_title">Title<abbr title="required">*</abbr></label>"#
        );

        let localized = HtmlLabels::new()
            .for_object("post")
            .with_catalog(catalog())
            .build();
        assert_eq!(
            localized
                .label(&f("body"), LabelOptions::new().with_required(true))
                .unwrap(),
            r#"<label for="post_body">Text<abbr title="required field">*</abbr></label>"#
        );
    }

    #[test]
    fn catalog_marker_fills_in_when_config_leaves_required_unset() {
        let config: LabelConfig =
            serde_json::from_value(json!({"indicators": {"optional": " (optional)"}})).unwrap();
        let b = HtmlLabels::new()
            .for_object("post")
            .with_config(config)
            .with_catalog(catalog())
            .build();
        assert_eq!(
            b.label(&f("body"), LabelOptions::new().with_required(true)).unwrap(),
            r#"<label for="post_body">Text<abbr title="required field">*</abbr></label>"#
        );
    }

    #[test]
    fn configured_required_marker_beats_catalog_unless_forced() {
        let config: LabelConfig =
            serde_json::from_value(json!({"indicators": {"required": " (req)"}})).unwrap();
        let labels = HtmlLabels::new()
            .for_object("post")
            .with_config(config)
            .with_catalog(catalog());

        assert_eq!(
            labels
                .clone()
                .build()
                .label(&f("body"), LabelOptions::new().with_required(true))
                .unwrap(),
            r#"<label for="post_body">Text (req)</label>"#
        );
        assert_eq!(
            labels
                .with_localized_required()
                .build()
                .label(&f("body"), LabelOptions::new().with_required(true))
                .unwrap(),
            r#"<label for="post_body">Text<abbr title="required field">*</abbr></label>"#
        );
    }

    #[test]
    fn optional_indicator_from_config() {
        let config = LabelConfig {
            indicators: IndicatorDefaults {
                required: Some(Indicator::literal("*")),
                optional: Indicator::literal(" (optional)"),
            },
            ..LabelConfig::default()
        };
        let b = HtmlLabels::new().for_object("post").with_config(config).build();
        assert_eq!(
            b.label(&f("title"), LabelOptions::new().with_required(false))
                .unwrap(),
            r#"<label for="post_title">Title (optional)</label>"#
        );
    }

    #[test]
    fn span_shape() {
        let b = HtmlLabels::new().for_object("post").build();
        assert_eq!(
            b.label(&f("title"), LabelOptions::new().with_as_span(true)).unwrap(),
            r#"<span class="label">Title</span>"#
        );
        assert_eq!(
            b.label(
                &f("title"),
                LabelOptions::new().with_as_span(true).with_attr("class", "mine")
            )
            .unwrap(),
            r#"<span class="mine">Title</span>"#
        );
    }

    #[test]
    fn input_name_binds_other_field() {
        let b = HtmlLabels::new().for_object("post").build();
        assert_eq!(
            b.label(&f("authors"), LabelOptions::new().with_input_name("author_ids"))
                .unwrap(),
            r#"<label for="post_author_ids">Authors</label>"#
        );
    }

    #[test]
    fn suppressed_label_is_empty() {
        let b = HtmlLabels::new().for_object("post").build();
        let opts = LabelOptions::from_json(&json!({"label": false, "class": "x"})).unwrap();
        assert_eq!(b.label(&f("title"), opts).unwrap(), "");
    }

    #[test]
    fn checkbox_label_wraps_nested_input() {
        let b = HtmlLabels::new().for_object("post").build();
        let opts = LabelOptions::new()
            .with_nested_prefix(r#"<input type="checkbox" name="post[published]"/>"#)
            .with_label("Published?");
        assert_eq!(
            b.label(&f("published"), opts).unwrap(),
            r#"<label for="post_published"><input type="checkbox" name="post[published]"/>Published?</label>"#
        );
    }

    #[test]
    fn json_options_pass_attributes_through() {
        let b = HtmlLabels::new().for_object("post").build();
        let opts = LabelOptions::from_json(&json!({
            "required": "!",
            "class": "big",
            "data-x": 1,
            "label_html": {"class": "ignored-here"}
        }))
        .unwrap();

        assert_eq!(
            b.label(&f("title"), opts).unwrap(),
            r#"<label class="big" data-x="1" for="post_title">Title!</label>"#
        );
    }

    #[test]
    fn label_html_used_through_for_label() {
        let b = HtmlLabels::new().for_object("post").build();
        let input_opts = LabelOptions::new()
            .with_required(true)
            .with_attr("placeholder", "Title here")
            .with_label_html(Attributes::new().with("class", "big"));

        assert_eq!(
            b.label(&f("title"), input_opts.for_label()).unwrap(),
            r#"<label class="big" for="post_title">Title<abbr title="required">*</abbr></label>"#
        );
    }

    #[test]
    fn label_html_text_and_required_are_not_attributes() {
        let b = HtmlLabels::new().for_object("post").build();
        let input_opts = LabelOptions::from_json(&json!({
            "label_html": {"label": "From html", "required": true, "class": "big"}
        }))
        .unwrap();

        assert_eq!(
            b.label(&f("title"), input_opts.for_label()).unwrap(),
            r#"<label class="big" for="post_title">From html<abbr title="required">*</abbr></label>"#
        );
    }

    #[test]
    fn boolean_json_attributes_render_like_tag_helper() {
        let b = HtmlLabels::new().for_object("post").build();
        let opts = LabelOptions::from_json(&json!({"hidden": true, "disabled": false})).unwrap();

        assert_eq!(
            b.label(&f("title"), opts).unwrap(),
            r#"<label for="post_title" hidden="hidden">Title</label>"#
        );
    }
}
