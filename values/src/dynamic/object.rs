use alloc::{rc::Rc, string::String, vec::Vec};

use hashbrown::HashMap;

use super::Value;

/// A property stored directly on an [`Object`].
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub value: Value,
    /// Non-enumerable properties are skipped by key/value enumeration.
    pub enumerable: bool,
}

/// A string-keyed container with an optional prototype.
///
/// Own properties keep insertion order; a `hashbrown` index maps each key to
/// its position. Properties found only on the prototype chain are inherited
/// and are never reported as own.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use protoseq_values::{Object, Value};
///
/// let proto: Object = [("inherited", 0)].into_iter().collect();
/// let mut obj = Object::with_prototype(Rc::new(proto));
/// obj.insert("own", 1);
///
/// assert!(obj.has_own("own"));
/// assert!(!obj.has_own("inherited"));
/// assert_eq!(obj.get("inherited"), Some(&Value::from(0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Object {
    properties: Vec<(String, Property)>,
    index: HashMap<String, usize>,
    prototype: Option<Rc<Object>>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prototype(prototype: Rc<Object>) -> Self {
        Self {
            prototype: Some(prototype),
            ..Self::default()
        }
    }

    pub fn prototype(&self) -> Option<&Rc<Object>> {
        self.prototype.as_ref()
    }

    /// Number of own properties, enumerable or not.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Sets an own enumerable property.
    ///
    /// Overwriting an existing key keeps its position and enumerability.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&position) => self.properties[position].1.value = value,
            None => self.push_property(key, Property {
                value,
                enumerable: true,
            }),
        }
    }

    /// Defines an own property with explicit enumerability, replacing any
    /// existing definition in place.
    pub fn define_property(&mut self, key: impl Into<String>, value: impl Into<Value>, enumerable: bool) {
        let key = key.into();
        let property = Property {
            value: value.into(),
            enumerable,
        };
        match self.index.get(&key) {
            Some(&position) => self.properties[position].1 = property,
            None => self.push_property(key, property),
        }
    }

    fn push_property(&mut self, key: String, property: Property) {
        self.index.insert(key.clone(), self.properties.len());
        self.properties.push((key, property));
    }

    /// Removes an own property. Inherited properties are untouched.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let position = self.index.remove(key)?;
        let (_, property) = self.properties.remove(position);
        for (_, slot) in self.index.iter_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(property.value)
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get_own_property(&self, key: &str) -> Option<&Property> {
        self.index.get(key).map(|&position| &self.properties[position].1)
    }

    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.get_own_property(key).map(|property| &property.value)
    }

    /// Looks `key` up on the object, then along its prototype chain.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut current = Some(self);
        while let Some(object) = current {
            if let Some(value) = object.get_own(key) {
                return Some(value);
            }
            current = object.prototype.as_deref();
        }
        None
    }

    /// Own properties in insertion order, enumerable or not.
    pub fn own_properties(&self) -> impl Iterator<Item = (&str, &Property)> + '_ {
        self.properties
            .iter()
            .map(|(key, property)| (key.as_str(), property))
    }
}

/// Compares own properties in order, then prototypes.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.properties == other.properties && self.prototype == other.prototype
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}
