//! Attribute definitions and the shared-ID attribute registry.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::error::GraphError;
use crate::model::{AttributeType, Value};

/// The element class an attribute applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeClass {
    Node,
    Edge,
}

impl AttributeClass {
    /// Returns the token written in the `class` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeClass::Node => "node",
            AttributeClass::Edge => "edge",
        }
    }
}

impl fmt::Display for AttributeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-side description of an attribute to define.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDef {
    pub title: String,
    pub kind: AttributeType,
    pub default: Option<Value>,
}

impl AttributeDef {
    /// Creates a definition without a default value.
    pub fn new(title: impl Into<String>, kind: AttributeType) -> Self {
        Self {
            title: title.into(),
            kind,
            default: None,
        }
    }

    /// Sets the default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A registered attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Registry-assigned ID, unique across node and edge attributes.
    pub id: String,
    pub title: String,
    pub kind: AttributeType,
    pub default: Option<Value>,
}

/// Attribute definitions for both classes.
///
/// IDs come from one counter shared by node and edge attributes, so
/// the two lists never collide. Titles are unique across both classes.
#[derive(Debug, Clone, Default)]
pub struct AttributeRegistry {
    node: Vec<Attribute>,
    edge: Vec<Attribute>,
    /// Title -> (class, index into that class's list).
    titles: FxHashMap<String, (AttributeClass, usize)>,
}

impl AttributeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a batch of definitions for `class`.
    ///
    /// The batch is all-or-nothing: if any title is already taken (in
    /// either class or earlier in the batch) or any default does not fit
    /// its type, nothing is registered. Returns the assigned IDs in
    /// batch order.
    pub fn define(
        &mut self,
        class: AttributeClass,
        defs: impl IntoIterator<Item = AttributeDef>,
    ) -> Result<Vec<String>, GraphError> {
        let defs: Vec<AttributeDef> = defs.into_iter().collect();

        let mut staged = Vec::with_capacity(defs.len());
        let mut seen = FxHashSet::with_capacity_and_hasher(defs.len(), Default::default());
        for def in defs {
            if self.titles.contains_key(&def.title) || !seen.insert(def.title.clone()) {
                return Err(GraphError::DuplicateAttribute { title: def.title });
            }
            let default = match def.default {
                Some(v) => Some(def.kind.coerce(v).map_err(|v| GraphError::TypeMismatch {
                    title: def.title.clone(),
                    expected: def.kind,
                    found: v.kind(),
                })?),
                None => None,
            };
            staged.push((def.title, def.kind, default));
        }

        let mut ids = Vec::with_capacity(staged.len());
        for (title, kind, default) in staged {
            let id = self.titles.len().to_string();
            let idx = self.attributes(class).len();
            self.titles.insert(title.clone(), (class, idx));
            self.list_mut(class).push(Attribute {
                id: id.clone(),
                title,
                kind,
                default,
            });
            ids.push(id);
        }

        debug!(class = %class, count = ids.len(), total = self.titles.len(), "registered attributes");
        Ok(ids)
    }

    /// Returns the ID assigned to `title` in either class.
    pub fn resolve_id(&self, title: &str) -> Option<&str> {
        self.titles
            .get(title)
            .map(|&(class, idx)| self.attributes(class)[idx].id.as_str())
    }

    /// Returns the attribute named `title` if it belongs to `class`.
    pub fn lookup(&self, class: AttributeClass, title: &str) -> Option<&Attribute> {
        match self.titles.get(title) {
            Some(&(c, idx)) if c == class => self.attributes(class).get(idx),
            _ => None,
        }
    }

    /// Returns the definitions of `class` in registration order.
    pub fn attributes(&self, class: AttributeClass) -> &[Attribute] {
        match class {
            AttributeClass::Node => &self.node,
            AttributeClass::Edge => &self.edge,
        }
    }

    /// Total number of registered attributes across both classes.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Returns true if no attribute is registered.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    fn list_mut(&mut self, class: AttributeClass) -> &mut Vec<Attribute> {
        match class {
            AttributeClass::Node => &mut self.node,
            AttributeClass::Edge => &mut self.edge,
        }
    }
}
