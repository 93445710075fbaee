//! Token-level serialization of the `<graph>` element.
//!
//! GEXF puts two `<attributes>` elements side by side under `<graph>`
//! (node class first, then edge class), so the element boundaries are
//! managed here by hand rather than derived from the model's shape.

use std::hash::Hash;
use std::io::{self, Write};

use crate::codec::writer::XmlWriter;
use crate::model::{AttValue, Attribute, AttributeClass, Graph};

/// Writes `graph` as a `<graph>` element.
///
/// Emission order: header children (`mode`, `defaultedgetype`), node
/// attribute schema, edge attribute schema, nodes, edges.
pub fn write_graph<W, F>(w: &mut XmlWriter<W>, graph: &Graph<F>) -> io::Result<()>
where
    W: Write,
    F: Eq + Hash,
{
    let mode = graph.mode().as_str();
    let edge_type = graph.default_edge_type().as_str();

    w.start("graph", &[("mode", mode), ("defaultedgetype", edge_type)])?;

    w.element("mode", &[], mode)?;
    w.element("defaultedgetype", &[], edge_type)?;

    write_attributes(w, AttributeClass::Node, graph.node_attributes())?;
    write_attributes(w, AttributeClass::Edge, graph.edge_attributes())?;

    w.start("nodes", &[])?;
    for node in graph.nodes() {
        w.start(
            "node",
            &[("id", node.id.as_str()), ("label", node.label.as_str())],
        )?;
        write_attvalues(w, &node.values)?;
        w.end()?;
    }
    w.end()?;

    w.start("edges", &[])?;
    for edge in graph.edges() {
        w.start(
            "edge",
            &[
                ("id", edge.id.as_str()),
                ("source", edge.source.as_str()),
                ("target", edge.target.as_str()),
            ],
        )?;
        write_attvalues(w, &edge.values)?;
        w.end()?;
    }
    w.end()?;

    w.end()
}

/// Writes one `<attributes class="..">` block, even when `attrs` is empty.
fn write_attributes<W: Write>(
    w: &mut XmlWriter<W>,
    class: AttributeClass,
    attrs: &[Attribute],
) -> io::Result<()> {
    w.start("attributes", &[("class", class.as_str())])?;
    for attr in attrs {
        w.start(
            "attribute",
            &[
                ("id", attr.id.as_str()),
                ("title", attr.title.as_str()),
                ("type", attr.kind.as_str()),
            ],
        )?;
        if let Some(default) = &attr.default {
            w.element("default", &[], &default.to_string())?;
        }
        w.end()?;
    }
    w.end()
}

/// Writes `<attvalues>`; omitted entirely when there are no values.
fn write_attvalues<W: Write>(w: &mut XmlWriter<W>, values: &[AttValue]) -> io::Result<()> {
    if values.is_empty() {
        return Ok(());
    }
    w.start("attvalues", &[])?;
    for av in values {
        let value = av.value.to_string();
        w.element(
            "attvalue",
            &[("for", av.attribute.as_str()), ("value", value.as_str())],
            "",
        )?;
    }
    w.end()
}
