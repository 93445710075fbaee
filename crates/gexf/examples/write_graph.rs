//! Writes a small typed graph as GEXF to stdout or to a file.
//!
//! ```text
//! cargo run --example write_graph -- out.gexf
//! ```

use std::fs::File;
use std::io;

use gexf::{AttributeDef, AttributeType, EncodeOptions, Graph, encode_with_options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut graph = Graph::new();

    graph.set_node_attributes([
        AttributeDef::new("a0", AttributeType::String).with_default("foo"),
        AttributeDef::new("a1", AttributeType::Float).with_default(1),
    ])?;
    graph.set_edge_attributes([
        AttributeDef::new("a2", AttributeType::String).with_default("bar"),
    ])?;

    graph.add_node("1", "node 1", [("a0", "BAR")])?;
    graph.add_node("2", "node 2", [("a1", 2)])?;
    graph.add_edge("1", "2", [("a2", "FOO")])?;

    let options = EncodeOptions::new()
        .creator("write_graph example")
        .description("two nodes, one edge");

    match std::env::args().nth(1) {
        Some(path) => {
            encode_with_options(File::create(&path)?, &graph, &options)?;
            eprintln!(
                "Wrote {} nodes and {} edges to {}",
                graph.nodes().len(),
                graph.edges().len(),
                path
            );
        }
        None => {
            encode_with_options(io::stdout().lock(), &graph, &options)?;
            println!();
        }
    }

    Ok(())
}
