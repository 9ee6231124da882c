//! Caller-owned entity registry
//!
//! Integrations attach their own bookkeeping objects to a hub under string
//! keys. The hub stores them and hands them back, it never looks inside.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Map from key to any value owned by the caller
#[derive(Default)]
pub struct Entities {
    inner: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, returning the previous entry if any
    pub fn insert<T>(&mut self, key: impl Into<String>, value: T) -> Option<Box<dyn Any + Send + Sync>>
    where
        T: Any + Send + Sync,
    {
        self.inner.insert(key.into(), Box::new(value))
    }

    /// Entry under `key` if it holds a `T`
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.inner.get(key).and_then(|v| v.downcast_ref::<T>())
    }

    pub fn get_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.inner.get_mut(key).and_then(|v| v.downcast_mut::<T>())
    }

    pub fn remove(&mut self, key: &str) -> Option<Box<dyn Any + Send + Sync>> {
        self.inner.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for Entities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_and_get() {
        let mut entities = Entities::new();
        entities.insert("entity_id", json!({"dummy": "data"}));

        let entity = entities.get::<serde_json::Value>("entity_id").unwrap();
        assert_eq!(entity["dummy"], "data");
    }

    #[test]
    fn test_wrong_type_is_none() {
        let mut entities = Entities::new();
        entities.insert("sensor_1", 42u32);

        assert_eq!(entities.get::<String>("sensor_1"), None);
        assert_eq!(entities.get::<u32>("sensor_1"), Some(&42));
    }

    #[test]
    fn test_get_mut_and_remove() {
        let mut entities = Entities::new();
        entities.insert("counter", 1u32);

        *entities.get_mut::<u32>("counter").unwrap() += 1;
        assert_eq!(entities.get::<u32>("counter"), Some(&2));

        assert!(entities.remove("counter").is_some());
        assert!(entities.is_empty());
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut entities = Entities::new();
        assert!(entities.insert("a", String::from("first")).is_none());
        assert!(entities.insert("a", String::from("second")).is_some());
        assert_eq!(entities.len(), 1);
        assert_eq!(entities.get::<String>("a").map(String::as_str), Some("second"));
    }
}
