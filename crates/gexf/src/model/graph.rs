//! The in-memory graph: nodes, edges, attribute schema and feature IDs.

use std::fmt;
use std::hash::Hash;

use crate::error::GraphError;
use crate::model::{
    Attribute, AttributeClass, AttributeDef, AttributeRegistry, FeatureIdCache, Value,
};

/// Graph mode written in the graph header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Static,
    Dynamic,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Static => "static",
            Mode::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default directionality of edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeType {
    #[default]
    Directed,
    Undirected,
    Mutual,
}

impl EdgeType {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeType::Directed => "directed",
            EdgeType::Undirected => "undirected",
            EdgeType::Mutual => "mutual",
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value attached to a node or edge for one defined attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttValue {
    /// ID of the attribute this value is for.
    pub attribute: String,
    pub value: Value,
}

/// A graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub values: Vec<AttValue>,
}

/// A graph edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Zero-based insertion index, stringified.
    pub id: String,
    pub source: String,
    pub target: String,
    pub values: Vec<AttValue>,
}

/// A GEXF graph under construction.
///
/// `F` is the key type of the feature ID cache (see [`Graph::feature_id`]).
#[derive(Debug, Clone)]
pub struct Graph<F = String> {
    mode: Mode,
    default_edge_type: EdgeType,
    attributes: AttributeRegistry,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    features: FeatureIdCache<F>,
}

impl Graph {
    /// Creates an empty static, directed graph with string feature keys.
    pub fn new() -> Self {
        Self::with_feature_keys()
    }
}

impl<F: Eq + Hash> Graph<F> {
    /// Creates an empty static, directed graph with feature keys of type `F`.
    pub fn with_feature_keys() -> Self {
        Self {
            mode: Mode::default(),
            default_edge_type: EdgeType::default(),
            attributes: AttributeRegistry::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            features: FeatureIdCache::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn default_edge_type(&self) -> EdgeType {
        self.default_edge_type
    }

    pub fn set_default_edge_type(&mut self, edge_type: EdgeType) {
        self.default_edge_type = edge_type;
    }

    /// Defines node attributes. See [`AttributeRegistry::define`].
    pub fn set_node_attributes(
        &mut self,
        defs: impl IntoIterator<Item = AttributeDef>,
    ) -> Result<Vec<String>, GraphError> {
        self.attributes.define(AttributeClass::Node, defs)
    }

    /// Defines edge attributes. See [`AttributeRegistry::define`].
    pub fn set_edge_attributes(
        &mut self,
        defs: impl IntoIterator<Item = AttributeDef>,
    ) -> Result<Vec<String>, GraphError> {
        self.attributes.define(AttributeClass::Edge, defs)
    }

    /// Returns the node attribute definitions.
    pub fn node_attributes(&self) -> &[Attribute] {
        self.attributes.attributes(AttributeClass::Node)
    }

    /// Returns the edge attribute definitions.
    pub fn edge_attributes(&self) -> &[Attribute] {
        self.attributes.attributes(AttributeClass::Edge)
    }

    /// Returns the attribute registry.
    pub fn attribute_registry(&self) -> &AttributeRegistry {
        &self.attributes
    }

    /// Adds a node.
    ///
    /// Each `(title, value)` pair must name a defined node attribute and
    /// fit its type. Node IDs are not checked for uniqueness.
    pub fn add_node<T, V>(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        values: impl IntoIterator<Item = (T, V)>,
    ) -> Result<(), GraphError>
    where
        T: Into<String>,
        V: Into<Value>,
    {
        let values = self.resolve_values(AttributeClass::Node, values)?;
        self.nodes.push(Node {
            id: id.into(),
            label: label.into(),
            values,
        });
        Ok(())
    }

    /// Adds an edge and returns its ID.
    ///
    /// The ID is the number of edges added before this one. Endpoints are
    /// not checked against the node list.
    pub fn add_edge<T, V>(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        values: impl IntoIterator<Item = (T, V)>,
    ) -> Result<String, GraphError>
    where
        T: Into<String>,
        V: Into<Value>,
    {
        let values = self.resolve_values(AttributeClass::Edge, values)?;
        let id = self.edges.len().to_string();
        self.edges.push(Edge {
            id: id.clone(),
            source: source.into(),
            target: target.into(),
            values,
        });
        Ok(id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns a stable short ID for an arbitrary key.
    ///
    /// IDs are independent of attribute IDs: the first distinct key gets
    /// `"0"`, the next `"1"`, and repeated keys get their earlier ID.
    pub fn feature_id(&mut self, key: F) -> String {
        self.features.get_or_assign(key)
    }

    pub fn features(&self) -> &FeatureIdCache<F> {
        &self.features
    }

    fn resolve_values<T, V>(
        &self,
        class: AttributeClass,
        values: impl IntoIterator<Item = (T, V)>,
    ) -> Result<Vec<AttValue>, GraphError>
    where
        T: Into<String>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .map(|(title, value)| {
                let title: String = title.into();
                let Some(attr) = self.attributes.lookup(class, &title) else {
                    return Err(GraphError::UnknownAttribute { class, title });
                };
                let value = attr.kind.coerce(value.into()).map_err(|v| {
                    GraphError::TypeMismatch {
                        title,
                        expected: attr.kind,
                        found: v.kind(),
                    }
                })?;
                Ok(AttValue {
                    attribute: attr.id.clone(),
                    value,
                })
            })
            .collect()
    }
}

impl<F: Eq + Hash> Default for Graph<F> {
    fn default() -> Self {
        Self::with_feature_keys()
    }
}
