use std::{fmt, sync::Arc};

use serde::{Deserialize, Deserializer};

/// Text appended to a label to mark it required or optional.
///
/// Either a literal or a deferred computation. A deferred indicator is only
/// evaluated by [`Indicator::resolve`], i.e. at render time, so it may read
/// state that did not exist when the options were built.
#[derive(Clone)]
pub enum Indicator {
    Literal(String),
    Deferred(Arc<dyn Fn() -> String + Send + Sync>),
}

impl Indicator {
    pub fn literal(text: impl Into<String>) -> Self {
        Indicator::Literal(text.into())
    }

    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Indicator::Deferred(Arc::new(f))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Indicator::Deferred(_))
    }

    /// Produce the indicator text, invoking a deferred computation if needed.
    pub fn resolve(&self) -> String {
        match self {
            Indicator::Literal(text) => text.clone(),
            Indicator::Deferred(f) => f(),
        }
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Indicator::Literal(String::new())
    }
}

impl fmt::Debug for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Indicator::Deferred(_) => f.write_str("Deferred(<fn>)"),
        }
    }
}

impl From<&str> for Indicator {
    fn from(s: &str) -> Self {
        Indicator::Literal(s.to_string())
    }
}

impl From<String> for Indicator {
    fn from(s: String) -> Self {
        Indicator::Literal(s)
    }
}

impl<'de> Deserialize<'de> for Indicator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Indicator::Literal)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::Indicator;

    #[test]
    fn literal_resolves_to_itself() {
        assert_eq!(Indicator::literal("*").resolve(), "*");
        assert_eq!(Indicator::default().resolve(), "");
    }

    #[test]
    fn deferred_is_evaluated_on_each_resolve_only() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let ind = Indicator::deferred(move || {
            let n = seen.fetch_add(1, Ordering::SeqCst) + 1;
            format!("call {n}")
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(ind.resolve(), "call 1");
        assert_eq!(ind.resolve(), "call 2");
        assert!(ind.is_deferred());
    }

    #[test]
    fn debug_hides_closure() {
        let ind = Indicator::deferred(|| "x".to_string());
        assert_eq!(format!("{ind:?}"), "Deferred(<fn>)");
        assert_eq!(format!("{:?}", Indicator::literal("*")), r#"Literal("*")"#);
    }

    #[test]
    fn deserializes_from_plain_string() {
        let ind: Indicator = serde_json::from_str(r#""(optional)""#).unwrap();
        assert_eq!(ind.resolve(), "(optional)");
    }
}
