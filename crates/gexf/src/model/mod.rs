//! Data model types for GEXF graphs.
//!
//! - Attribute types and typed values
//! - Attribute definitions and the shared-ID registry
//! - Feature ID cache
//! - Graph, nodes and edges
//! - Builders (ergonomic value construction)

pub mod attribute;
pub mod builder;
pub mod feature;
pub mod graph;
pub mod value;

pub use attribute::{Attribute, AttributeClass, AttributeDef, AttributeRegistry};
pub use builder::AttValues;
pub use feature::FeatureIdCache;
pub use graph::{AttValue, Edge, EdgeType, Graph, Mode, Node};
pub use value::{AttributeType, Value};
