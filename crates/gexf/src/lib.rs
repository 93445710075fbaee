//! GEXF: write-only encoder for the Graph Exchange XML Format.
//!
//! This crate builds typed graphs in memory and writes them as GEXF 1.2
//! documents, the format read by Gephi and other graph-visualization tools.
//!
//! # Overview
//!
//! - **Typed attribute schemas**: node and edge attributes are declared up
//!   front with a type and optional default
//! - **Stable short IDs**: attribute IDs come from one counter shared by
//!   both classes; arbitrary "feature" keys map to their own sequential IDs
//! - **Exact output**: element and attribute order is fixed, so encoding
//!   the same graph on the same day yields identical bytes
//!
//! # Quick Start
//!
//! ```rust
//! use gexf::{AttributeDef, AttributeType, EncodeOptions, Graph};
//! use gexf::codec::encode_to_vec;
//!
//! let mut graph = Graph::new();
//! graph.set_node_attributes([
//!     AttributeDef::new("kind", AttributeType::String).with_default("person"),
//! ])?;
//! graph.set_edge_attributes([AttributeDef::new("weight", AttributeType::Float)])?;
//!
//! graph.add_node("1", "Alice", [("kind", "person")])?;
//! graph.add_node("2", "Bob", [("kind", "robot")])?;
//! let edge_id = graph.add_edge("1", "2", [("weight", 0.5)])?;
//! assert_eq!(edge_id, "0");
//!
//! let options = EncodeOptions::new().last_modified("2024-01-15");
//! let xml = String::from_utf8(encode_to_vec(&graph, &options)?)?;
//! assert!(xml.contains(r#"<attvalue for="1" value="0.5"></attvalue>"#));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`model`]: Graph, attribute registry, values, feature IDs
//! - [`codec`]: XML token writer, graph serializer and document envelope
//! - [`validate`]: Advisory structural checks
//! - [`util`]: Date helpers for the document meta block
//! - [`error`]: Error types

pub mod codec;
pub mod error;
pub mod model;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{EncodeOptions, encode, encode_compressed, encode_to_vec, encode_with_options};
pub use error::{DateParseError, EncodeError, GraphError, ValidationError};
pub use model::{
    AttValue, AttValues, Attribute, AttributeClass, AttributeDef, AttributeRegistry,
    AttributeType, Edge, EdgeType, FeatureIdCache, Graph, Mode, Node, Value,
};
pub use validate::validate_graph;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
