//! Label builder: the public entry point of the pipeline.
//!
//! Resolves the label text (see [`crate::text`]) and dispatches it either to
//! the base label renderer, bound to the field or its `input_name` override,
//! or to the tag renderer as a `span` container.
use lbl_model::{Attributes, CLASS_ATTR, FieldName, LabelArg, LabelOptions};
use tracing::{debug, instrument, trace};

use crate::{
    collab::{BaseLabelRenderer, TagRenderer},
    context::LabelContext,
    error::RenderError,
    text::{TextSources, resolve_text},
};

/// Renders decorated field labels.
#[derive(Debug, Clone)]
pub struct LabelBuilder {
    ctx: LabelContext,
}

impl LabelBuilder {
    pub fn new(ctx: LabelContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &LabelContext {
        &self.ctx
    }

    /// Render the label for `field`.
    ///
    /// - `label: false` in the options renders `""` and calls no collaborator;
    /// - text comes from the explicit text, the `label` option, a translation or
    ///   the humanized field name, in that order;
    /// - the required/optional indicator is appended and the nested-input
    ///   prefix prepended;
    /// - `as_span` renders a `span` (class `label` unless one is set), otherwise
    ///   the base renderer gets the `input_name` override or `field` as binding.
    ///
    /// Unrecognized options are passed through as attributes. Errors from the
    /// renderers are returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use lbl_core::{BaseLabelRenderer, LabelBuilder, LabelContext, RenderError, TagRenderer};
    /// use lbl_model::{Attributes, FieldName, LabelOptions};
    ///
    /// struct Bare;
    ///
    /// impl BaseLabelRenderer for Bare {
    ///     fn label(&self, f: &FieldName, text: &str, _: &Attributes) -> Result<String, RenderError> {
    ///         Ok(format!("{f}: {text}"))
    ///     }
    /// }
    ///
    /// impl TagRenderer for Bare {
    ///     fn content_tag(&self, tag: &str, text: &str, _: &Attributes) -> Result<String, RenderError> {
    ///         Ok(format!("{tag}: {text}"))
    ///     }
    /// }
    ///
    /// let builder = LabelBuilder::new(LabelContext::new(Arc::new(Bare), Arc::new(Bare)));
    /// let field = FieldName::from("first_name");
    ///
    /// assert_eq!(builder.label(&field, "Name").unwrap(), "first_name: Name");
    /// assert_eq!(
    ///     builder.label(&field, LabelOptions::new().with_as_span(true)).unwrap(),
    ///     "span: First name"
    /// );
    /// assert_eq!(builder.label(&field, LabelOptions::new().without_label()).unwrap(), "");
    /// ```
    pub fn label(&self, field: &FieldName, arg: impl Into<LabelArg>) -> Result<String, RenderError> {
        let (explicit, options) = arg.into().into_parts();
        self.render(field, explicit, options)
    }

    /// `label(field, text, options)`.
    pub fn label_with_text(
        &self,
        field: &FieldName,
        text: impl Into<String>,
        options: LabelOptions,
    ) -> Result<String, RenderError> {
        self.render(field, Some(text.into()), options)
    }

    /// `label(field, options)`; literal text may come from the `label` option.
    pub fn label_with_options(
        &self,
        field: &FieldName,
        options: LabelOptions,
    ) -> Result<String, RenderError> {
        self.render(field, None, options)
    }

    /// Resolve only the decorated text, without rendering markup.
    ///
    /// Returns `None` for `label: false`.
    pub fn label_text(&self, field: &FieldName, arg: impl Into<LabelArg>) -> Option<String> {
        let (explicit, options) = arg.into().into_parts();
        resolve_text(
            &self.ctx,
            field,
            TextSources {
                explicit: explicit.as_deref(),
                label: options.label(),
                required: options.requirement(),
                nested_prefix: options.nested_prefix(),
            },
        )
    }

    #[instrument(level = "debug", skip(self, explicit, options), fields(field = %field))]
    fn render(
        &self,
        field: &FieldName,
        explicit: Option<String>,
        options: LabelOptions,
    ) -> Result<String, RenderError> {
        if options.is_suppressed() {
            debug!("label suppressed");
            return Ok(String::new());
        }

        let (recognized, attrs) = options.into_parts();
        trace!(attrs = attrs.len(), as_span = recognized.as_span, "options split");

        let sources = TextSources {
            explicit: explicit.as_deref(),
            label: recognized.label.as_ref(),
            required: recognized.required.as_ref(),
            nested_prefix: recognized.nested_prefix.as_deref(),
        };
        let Some(text) = resolve_text(&self.ctx, field, sources) else {
            return Ok(String::new());
        };

        let binding = recognized.input_name.as_ref().unwrap_or(field);
        if recognized.as_span {
            self.render_span(&text, attrs)
        } else {
            debug!(binding = %binding, "rendering label element");
            self.ctx.base_renderer().label(binding, &text, &attrs)
        }
    }

    fn render_span(&self, text: &str, mut attrs: Attributes) -> Result<String, RenderError> {
        attrs.insert_if_absent(CLASS_ATTR, self.ctx.config().span_class.as_str());
        debug!(class = ?attrs.get(CLASS_ATTR), "rendering span label");
        self.ctx.tag_renderer().content_tag("span", text, &attrs)
    }
}
