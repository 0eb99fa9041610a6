use std::{collections::BTreeMap, fs, path::Path};

use lbl_core::{Localizer, LookupQuery};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::HtmlError;

/// Translation catalog backed by dotted keys (`labels.post.title`).
///
/// Built from a nested JSON object. Label lookups cascade from the most
/// specific key to the bare attribute:
///
/// 1. `{scope}.{model}.{nested}.{action}.{attr}`
/// 2. `{scope}.{model}.{nested}.{attr}`
/// 3. `{scope}.{model}.{action}.{attr}`
/// 4. `{scope}.{model}.{attr}`
/// 5. `{scope}.{attr}`
///
/// Keys whose context segment is unknown are skipped.
#[derive(Debug, Clone, Default)]
pub struct CatalogLocalizer {
    entries: BTreeMap<String, String>,
}

impl CatalogLocalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a nested JSON object into dotted keys.
    ///
    /// Strings, numbers and booleans are leaves; arrays are rejected.
    pub fn from_json(value: &Value) -> Result<Self, HtmlError> {
        let obj = value
            .as_object()
            .ok_or_else(|| HtmlError::InvalidCatalog("root must be an object".to_string()))?;

        let mut entries = BTreeMap::new();
        for (key, val) in obj {
            flatten(key, val, &mut entries)?;
        }
        debug!(entries = entries.len(), "catalog loaded");
        Ok(Self { entries })
    }

    pub fn from_json_str(s: &str) -> Result<Self, HtmlError> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json(&value)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, HtmlError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Insert or overwrite a single dotted key.
    pub fn insert(&mut self, key: impl Into<String>, val: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), val.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw lookup by dotted key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    /// Candidate keys for a query, most specific first.
    pub fn candidate_keys(query: &LookupQuery<'_>) -> Vec<String> {
        let scope = query.scope;
        let attr = query.attribute.as_str();
        let mut keys = Vec::with_capacity(5);

        if let Some(model) = query.model {
            if let Some(nested) = query.nested_model {
                if let Some(action) = query.action {
                    keys.push(format!("{scope}.{model}.{nested}.{action}.{attr}"));
                }
                keys.push(format!("{scope}.{model}.{nested}.{attr}"));
            }
            if let Some(action) = query.action {
                keys.push(format!("{scope}.{model}.{action}.{attr}"));
            }
            keys.push(format!("{scope}.{model}.{attr}"));
        }
        keys.push(format!("{scope}.{attr}"));
        keys
    }
}

impl Localizer for CatalogLocalizer {
    fn translate(&self, query: &LookupQuery<'_>) -> Option<String> {
        Self::candidate_keys(query).into_iter().find_map(|key| {
            let hit = self.get(&key)?;
            trace!(key = %key, "catalog hit");
            Some(hit.to_string())
        })
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) -> Result<(), HtmlError> {
    match value {
        Value::Object(obj) => {
            for (key, val) in obj {
                flatten(&format!("{prefix}.{key}"), val, out)?;
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        Value::Null => {}
        Value::Array(_) => {
            return Err(HtmlError::InvalidCatalog(format!(
                "arrays are not supported (key '{prefix}')"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use lbl_model::FieldName;
    use serde_json::json;

    use super::*;

    fn catalog() -> CatalogLocalizer {
        CatalogLocalizer::from_json(&json!({
            "required": "obligatory",
            "labels": {
                "title": "Title (any)",
                "post": {
                    "title": "Post title",
                    "edit": { "title": "Edit post title" },
                    "author": {
                        "name": "Author name",
                        "new": { "name": "New author name" }
                    }
                }
            }
        }))
        .unwrap()
    }

    fn query<'a>(
        field: &'a FieldName,
        model: Option<&'a str>,
        nested: Option<&'a str>,
        action: Option<&'a str>,
    ) -> LookupQuery<'a> {
        LookupQuery {
            model,
            nested_model: nested,
            action,
            ..LookupQuery::label(field)
        }
    }

    #[test]
    fn flattens_nested_keys() {
        let c = catalog();
        assert_eq!(c.get("required"), Some("obligatory"));
        assert_eq!(c.get("labels.post.edit.title"), Some("Edit post title"));
        assert_eq!(c.len(), 6);
    }

    #[test]
    fn candidate_keys_order() {
        let f = FieldName::from("name");
        let keys = CatalogLocalizer::candidate_keys(&query(&f, Some("post"), Some("author"), Some("new")));
        assert_eq!(
            keys,
            vec![
                "labels.post.author.new.name",
                "labels.post.author.name",
                "labels.post.new.name",
                "labels.post.name",
                "labels.name",
            ]
        );

        let bare = CatalogLocalizer::candidate_keys(&LookupQuery::label(&f));
        assert_eq!(bare, vec!["labels.name"]);
    }

    #[test]
    fn most_specific_translation_wins() {
        let c = catalog();
        let title = FieldName::from("title");
        let name = FieldName::from("name");

        assert_eq!(
            c.translate(&query(&title, Some("post"), None, Some("edit"))).as_deref(),
            Some("Edit post title")
        );
        assert_eq!(
            c.translate(&query(&title, Some("post"), None, Some("show"))).as_deref(),
            Some("Post title")
        );
        assert_eq!(
            c.translate(&query(&title, Some("comment"), None, None)).as_deref(),
            Some("Title (any)")
        );
        assert_eq!(
            c.translate(&query(&name, Some("post"), Some("author"), Some("new"))).as_deref(),
            Some("New author name")
        );
        assert!(c.translate(&LookupQuery::label(&name)).is_none());
    }

    #[test]
    fn rejects_arrays_and_non_objects() {
        assert!(matches!(
            CatalogLocalizer::from_json(&json!({"labels": ["x"]})),
            Err(HtmlError::InvalidCatalog(_))
        ));
        assert!(matches!(
            CatalogLocalizer::from_json(&json!("x")),
            Err(HtmlError::InvalidCatalog(_))
        ));
        assert!(matches!(
            CatalogLocalizer::from_json_str("{not json"),
            Err(HtmlError::Json(_))
        ));
    }

    #[test]
    fn insert_overrides_entries() {
        let mut c = CatalogLocalizer::new();
        assert!(c.is_empty());
        c.insert("labels.title", "A").insert("labels.title", "B");
        assert_eq!(c.get("labels.title"), Some("B"));
    }
}
