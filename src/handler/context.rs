use std::any::Any;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("no value stored under key `{0}`")]
    Missing(&'static str),
    #[error("value stored under key `{0}` has a different type")]
    WrongType(&'static str),
}

/// Request-scoped key/value store.
///
/// One `Context` is allocated per request when it enters the pipeline and
/// dropped once the response is written, so values set by an earlier
/// middleware stage are visible to every later stage of the same request and
/// never to any other request. Keys don't need to be declared up front.
#[derive(Default)]
pub struct Context {
    values: HashMap<&'static str, Box<dyn Any + Send + Sync>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set<T: Any + Send + Sync>(&mut self, key: &'static str, value: T) {
        self.values.insert(key, Box::new(value));
    }

    /// Typed accessor. An absent key or a value of another type surfaces as
    /// a [`ContextError`] instead of a panicking downcast, so callers can
    /// tell "never set" apart from whatever the stored value says.
    pub fn get<T: Any + Send + Sync>(&self, key: &'static str) -> Result<&T, ContextError> {
        let value = self.values.get(key).ok_or(ContextError::Missing(key))?;
        value
            .downcast_ref::<T>()
            .ok_or(ContextError::WrongType(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.values.keys()).finish()
    }
}
