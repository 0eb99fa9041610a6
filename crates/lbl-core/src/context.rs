use std::fmt;

use lbl_model::FieldName;

use crate::{
    collab::{
        BaseLabelHandle, Humanizer, HumanizerHandle, LocalizerHandle, LookupQuery, StringHumanizer,
        TagHandle, no_translations,
    },
    config::LabelConfig,
};

/// Model/action context used to narrow localization lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupScope {
    pub model: Option<String>,
    pub nested_model: Option<String>,
    pub action: Option<String>,
}

impl LookupScope {
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            ..Self::default()
        }
    }

    pub fn with_nested_model(mut self, nested: impl Into<String>) -> Self {
        self.nested_model = Some(nested.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Label lookup query for `attribute` within this scope.
    pub fn query<'a>(&'a self, attribute: &'a FieldName) -> LookupQuery<'a> {
        LookupQuery {
            model: self.model.as_deref(),
            nested_model: self.nested_model.as_deref(),
            action: self.action.as_deref(),
            ..LookupQuery::label(attribute)
        }
    }
}

/// Shared context for label rendering.
///
/// Holds the collaborator handles, the process-wide [`LabelConfig`] and the
/// lookup scope. Cheap to clone.
#[derive(Clone)]
pub struct LabelContext {
    base: BaseLabelHandle,
    tags: TagHandle,
    localizer: LocalizerHandle,
    humanizer: Option<HumanizerHandle>,
    fallback: StringHumanizer,
    config: LabelConfig,
    scope: LookupScope,
}

impl LabelContext {
    /// Create a context with the given markup renderers, no translations and
    /// the default configuration.
    pub fn new(base: BaseLabelHandle, tags: TagHandle) -> Self {
        Self {
            base,
            tags,
            localizer: no_translations(),
            humanizer: None,
            fallback: StringHumanizer::default(),
            config: LabelConfig::default(),
            scope: LookupScope::default(),
        }
    }

    pub fn with_localizer(mut self, localizer: LocalizerHandle) -> Self {
        self.localizer = localizer;
        self
    }

    /// Replace the humanizer. Without one, a [`StringHumanizer`] using
    /// `config.label_case` is used.
    pub fn with_humanizer(mut self, humanizer: HumanizerHandle) -> Self {
        self.humanizer = Some(humanizer);
        self
    }

    pub fn with_config(mut self, config: LabelConfig) -> Self {
        self.fallback = StringHumanizer::new(config.label_case);
        self.config = config;
        self
    }

    pub fn with_scope(mut self, scope: LookupScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn base_renderer(&self) -> &BaseLabelHandle {
        &self.base
    }

    pub fn tag_renderer(&self) -> &TagHandle {
        &self.tags
    }

    pub fn localizer(&self) -> &LocalizerHandle {
        &self.localizer
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    pub fn scope(&self) -> &LookupScope {
        &self.scope
    }

    /// The effective humanizer.
    pub fn humanizer(&self) -> &dyn Humanizer {
        match &self.humanizer {
            Some(h) => h.as_ref(),
            None => &self.fallback,
        }
    }
}

impl fmt::Debug for LabelContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelContext")
            .field("base", &"<handle>")
            .field("tags", &"<handle>")
            .field("localizer", &"<handle>")
            .field("custom_humanizer", &self.humanizer.is_some())
            .field("config", &self.config)
            .field("scope", &self.scope)
            .finish()
    }
}
