//! XML encoding for GEXF.
//!
//! [`writer`] is the token-level XML writer, [`graph`] serializes the
//! `<graph>` body and [`document`] wraps it in the `<gexf>` envelope.

pub mod document;
pub mod graph;
pub mod writer;

pub use document::{
    DEFAULT_CREATOR, DEFAULT_DESCRIPTION, EncodeOptions, GEXF_NAMESPACE, GEXF_VERSION, encode,
    encode_compressed, encode_to_vec, encode_with_options,
};
pub use graph::write_graph;
pub use writer::{XmlWriter, escape, escape_str};
