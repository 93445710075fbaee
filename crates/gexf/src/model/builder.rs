//! Builder API for per-element attribute values.
//!
//! # Example
//!
//! ```rust
//! use gexf::{AttributeDef, AttributeType, Graph};
//!
//! let mut graph = Graph::new();
//! graph
//!     .set_node_attributes([
//!         AttributeDef::new("name", AttributeType::String),
//!         AttributeDef::new("score", AttributeType::Double),
//!     ])
//!     .unwrap();
//!
//! graph
//!     .add_node_with("n1", "Alice", |v| v.text("name", "Alice").double("score", 0.75))
//!     .unwrap();
//! assert_eq!(graph.nodes()[0].values.len(), 2);
//! ```

use std::hash::Hash;

use crate::error::GraphError;
use crate::model::{Graph, Value};

/// Ordered `(title, value)` pairs for one node or edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttValues {
    values: Vec<(String, Value)>,
}

impl AttValues {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value of any type.
    pub fn value(mut self, title: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.push((title.into(), value.into()));
        self
    }

    /// Adds a `string` or `anyURI` value.
    pub fn text(self, title: impl Into<String>, value: impl Into<String>) -> Self {
        self.value(title, Value::String(value.into()))
    }

    /// Adds a `long` value.
    pub fn long(self, title: impl Into<String>, value: i64) -> Self {
        self.value(title, Value::Integer(value))
    }

    /// Adds a `double` or `float` value.
    pub fn double(self, title: impl Into<String>, value: f64) -> Self {
        self.value(title, Value::Float(value))
    }

    /// Adds a `boolean` value.
    pub fn boolean(self, title: impl Into<String>, value: bool) -> Self {
        self.value(title, Value::Boolean(value))
    }

    /// Adds a `liststring` value.
    pub fn list<I, S>(self, title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value(
            title,
            Value::ListString(items.into_iter().map(Into::into).collect()),
        )
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IntoIterator for AttValues {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<F: Eq + Hash> Graph<F> {
    /// Adds a node whose values are built by `f`.
    pub fn add_node_with<B>(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        f: B,
    ) -> Result<(), GraphError>
    where
        B: FnOnce(AttValues) -> AttValues,
    {
        self.add_node(id, label, f(AttValues::new()))
    }

    /// Adds an edge whose values are built by `f`, returning its ID.
    pub fn add_edge_with<B>(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        f: B,
    ) -> Result<String, GraphError>
    where
        B: FnOnce(AttValues) -> AttValues,
    {
        self.add_edge(source, target, f(AttValues::new()))
    }
}
