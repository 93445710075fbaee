//! GEXF document envelope: root element, meta block and graph body.

use std::borrow::Cow;
use std::hash::Hash;
use std::io::{BufWriter, Write};

use tracing::debug;

use crate::codec::graph::write_graph;
use crate::codec::writer::XmlWriter;
use crate::error::EncodeError;
use crate::model::Graph;
use crate::util::datetime::{parse_date, today_utc};

/// Namespace URI of the `gexf` root element.
pub const GEXF_NAMESPACE: &str = "http://www.gexf.net/1.2draft";

/// Value of the root `version` attribute.
pub const GEXF_VERSION: &str = "1.2";

/// Default `<creator>` text.
pub const DEFAULT_CREATOR: &str = "gexf-rs";

/// Default `<description>` text.
pub const DEFAULT_DESCRIPTION: &str = "graph exported by gexf-rs";

/// Options for encoding documents.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Indentation step per nesting level. Empty writes a single line.
    pub indent: Cow<'static, str>,
    /// Text of `<meta><creator>`.
    pub creator: Cow<'static, str>,
    /// Text of `<meta><description>`.
    pub description: Cow<'static, str>,
    /// Fixed `lastmodifieddate` (`YYYY-MM-DD`).
    ///
    /// When unset, today's UTC date is used. Fixing it makes the output a
    /// pure function of the graph.
    pub last_modified: Option<String>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: Cow::Borrowed("    "),
            creator: Cow::Borrowed(DEFAULT_CREATOR),
            description: Cow::Borrowed(DEFAULT_DESCRIPTION),
            last_modified: None,
        }
    }
}

impl EncodeOptions {
    /// Creates default encoding options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(mut self, indent: impl Into<Cow<'static, str>>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn creator(mut self, creator: impl Into<Cow<'static, str>>) -> Self {
        self.creator = creator.into();
        self
    }

    pub fn description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = description.into();
        self
    }

    pub fn last_modified(mut self, date: impl Into<String>) -> Self {
        self.last_modified = Some(date.into());
        self
    }
}

/// Encodes `graph` as a GEXF document into `out` with default options.
pub fn encode<W, F>(out: W, graph: &Graph<F>) -> Result<(), EncodeError>
where
    W: Write,
    F: Eq + Hash,
{
    encode_with_options(out, graph, &EncodeOptions::default())
}

/// Encodes `graph` as a GEXF document into `out`.
///
/// Nothing is written if `options.last_modified` is malformed. A sink
/// failure aborts the encode and may leave a partial document behind.
pub fn encode_with_options<W, F>(
    out: W,
    graph: &Graph<F>,
    options: &EncodeOptions,
) -> Result<(), EncodeError>
where
    W: Write,
    F: Eq + Hash,
{
    let date = match &options.last_modified {
        Some(date) => {
            parse_date(date)?;
            date.clone()
        }
        None => today_utc(),
    };

    let mut w = XmlWriter::with_indent(BufWriter::new(out), options.indent.as_ref());
    w.start(
        "gexf",
        &[("xmlns", GEXF_NAMESPACE), ("version", GEXF_VERSION)],
    )?;

    w.start("meta", &[("lastmodifieddate", date.as_str())])?;
    w.element("creator", &[], &options.creator)?;
    w.element("description", &[], &options.description)?;
    w.end()?;

    write_graph(&mut w, graph)?;

    w.end()?;
    w.finish()?;

    debug!(
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        date = %date,
        "encoded gexf document"
    );
    Ok(())
}

/// Encodes `graph` into a new byte vector.
pub fn encode_to_vec<F: Eq + Hash>(
    graph: &Graph<F>,
    options: &EncodeOptions,
) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(256 + 64 * (graph.nodes().len() + graph.edges().len()));
    encode_with_options(&mut buf, graph, options)?;
    Ok(buf)
}

/// Encodes `graph` and writes it to `out` as a zstd frame.
pub fn encode_compressed<W, F>(
    mut out: W,
    graph: &Graph<F>,
    level: i32,
    options: &EncodeOptions,
) -> Result<(), EncodeError>
where
    W: Write,
    F: Eq + Hash,
{
    let uncompressed = encode_to_vec(graph, options)?;

    let compressed = zstd::encode_all(uncompressed.as_slice(), level)
        .map_err(|e| EncodeError::CompressionFailed(e.to_string()))?;
    debug!(
        uncompressed = uncompressed.len(),
        compressed = compressed.len(),
        level,
        "compressed gexf document"
    );

    out.write_all(&compressed)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use crate::error::GraphError;
    use crate::model::{AttributeDef, AttributeType, Value};

    const NO_VALUES: [(&str, Value); 0] = [];

    fn fixed() -> EncodeOptions {
        EncodeOptions::new().last_modified("2024-01-15")
    }

    fn make_test_graph() -> Result<Graph, GraphError> {
        let mut g = Graph::new();
        g.set_node_attributes([
            AttributeDef::new("a0", AttributeType::String).with_default("foo"),
            AttributeDef::new("a1", AttributeType::Float).with_default(1),
        ])?;
        g.set_edge_attributes([
            AttributeDef::new("a2", AttributeType::String).with_default("bar"),
        ])?;
        g.add_node("1", "node 1", [("a0", "BAR")])?;
        g.add_node("2", "node 2", [("a1", 2)])?;
        g.add_edge("1", "2", [("a2", "FOO")])?;
        Ok(g)
    }

    #[test]
    fn test_encode_full_document() {
        let g = make_test_graph().unwrap();

        let mut out = Vec::new();
        encode_with_options(&mut out, &g, &fixed()).unwrap();

        let expected = r#"<gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">
    <meta lastmodifieddate="2024-01-15">
        <creator>gexf-rs</creator>
        <description>graph exported by gexf-rs</description>
    </meta>
    <graph mode="static" defaultedgetype="directed">
        <mode>static</mode>
        <defaultedgetype>directed</defaultedgetype>
        <attributes class="node">
            <attribute id="0" title="a0" type="string">
                <default>foo</default>
            </attribute>
            <attribute id="1" title="a1" type="float">
                <default>1</default>
            </attribute>
        </attributes>
        <attributes class="edge">
            <attribute id="2" title="a2" type="string">
                <default>bar</default>
            </attribute>
        </attributes>
        <nodes>
            <node id="1" label="node 1">
                <attvalues>
                    <attvalue for="0" value="BAR"></attvalue>
                </attvalues>
            </node>
            <node id="2" label="node 2">
                <attvalues>
                    <attvalue for="1" value="2"></attvalue>
                </attvalues>
            </node>
        </nodes>
        <edges>
            <edge id="0" source="1" target="2">
                <attvalues>
                    <attvalue for="2" value="FOO"></attvalue>
                </attvalues>
            </edge>
        </edges>
    </graph>
</gexf>"#;

        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_encoding_deterministic() {
        let g = make_test_graph().unwrap();
        let first = encode_to_vec(&g, &fixed()).unwrap();
        let second = encode_to_vec(&g, &fixed()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_date_is_today() {
        let mut g = Graph::new();
        g.add_node("1", "only", NO_VALUES).unwrap();

        let mut out = Vec::new();
        encode(&mut out, &g).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains(&format!("<meta lastmodifieddate=\"{}\">", today_utc())));
        assert!(!out.starts_with("<?xml"));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_custom_meta_and_indent() {
        let g = Graph::new();
        let options = EncodeOptions::new()
            .indent("\t")
            .creator("Tom & Jerry")
            .description("")
            .last_modified("2020-02-29");

        let out = String::from_utf8(encode_to_vec(&g, &options).unwrap()).unwrap();
        assert!(out.starts_with(
            "<gexf xmlns=\"http://www.gexf.net/1.2draft\" version=\"1.2\">\n\t<meta lastmodifieddate=\"2020-02-29\">\n\t\t<creator>Tom &amp; Jerry</creator>\n\t\t<description></description>\n\t</meta>"
        ));
    }

    #[test]
    fn test_invalid_date_writes_nothing() {
        let g = Graph::new();
        let mut out = Vec::new();
        let options = EncodeOptions::new().last_modified("15/01/2024");
        let err = encode_with_options(&mut out, &g, &options).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidDate(_)));
        assert!(out.is_empty());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_propagates() {
        let g = make_test_graph().unwrap();
        let err = encode_with_options(FailingWriter, &g, &fixed()).unwrap_err();
        match err {
            EncodeError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_compressed_roundtrip() {
        let g = make_test_graph().unwrap();
        let plain = encode_to_vec(&g, &fixed()).unwrap();

        let mut compressed = Vec::new();
        encode_compressed(&mut compressed, &g, 3, &fixed()).unwrap();
        assert_ne!(compressed, plain);

        let decompressed = zstd::decode_all(compressed.as_slice()).unwrap();
        assert_eq!(decompressed, plain);
    }
}
