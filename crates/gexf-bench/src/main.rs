//! Benchmark for GEXF serialization using a synthetic citation graph.
//!
//! Demonstrates the builder API with a large generated dataset
//! (default 100k papers, ~4 citations each).

use std::time::Instant;

use gexf::{AttributeDef, AttributeType, EncodeOptions, Graph, encode_compressed, encode_to_vec};

const FIELDS: [&str; 8] = [
    "biology",
    "chemistry",
    "computer science",
    "economics",
    "mathematics",
    "medicine",
    "physics",
    "sociology",
];

/// Small deterministic xorshift generator so runs are comparable.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

// =============================================================================
// GRAPH CONSTRUCTION USING BUILDER API
// =============================================================================

fn build_graph(papers: usize) -> Result<Graph, gexf::GraphError> {
    let mut graph = Graph::new();
    graph.set_node_attributes([
        AttributeDef::new("field", AttributeType::String),
        AttributeDef::new("field_id", AttributeType::Long),
        AttributeDef::new("year", AttributeType::Long).with_default(2000),
        AttributeDef::new("score", AttributeType::Double).with_default(0.0),
        AttributeDef::new("open_access", AttributeType::Boolean).with_default(false),
        AttributeDef::new("keywords", AttributeType::ListString),
    ])?;
    graph.set_edge_attributes([
        AttributeDef::new("weight", AttributeType::Float).with_default(1.0),
        AttributeDef::new("self_citation", AttributeType::Boolean),
    ])?;

    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);

    for i in 0..papers {
        let field = FIELDS[rng.below(FIELDS.len() as u64) as usize];
        let field_id: i64 = graph.feature_id(field.to_string()).parse().unwrap_or(-1);
        let year = 1980 + rng.below(45) as i64;
        let score = rng.below(10_000) as f64 / 100.0;
        let open_access = rng.below(4) == 0;

        graph.add_node_with(i.to_string(), format!("paper {}", i), |v| {
            v.text("field", field)
                .long("field_id", field_id)
                .long("year", year)
                .double("score", score)
                .boolean("open_access", open_access)
                .list("keywords", [field, "citation"])
        })?;
    }

    for i in 1..papers {
        let citations = 1 + rng.below(7);
        for _ in 0..citations {
            let target = rng.below(i as u64) as usize;
            let weight = 1 + rng.below(5) as i64;
            let self_citation = rng.below(20) == 0;
            graph.add_edge_with(i.to_string(), target.to_string(), |v| {
                v.long("weight", weight).boolean("self_citation", self_citation)
            })?;
        }
    }

    Ok(graph)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gexf=info".parse().expect("valid directive")),
        )
        .init();

    let papers: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100_000);

    println!("Building graph with {} papers", papers);

    let build_start = Instant::now();
    let graph = build_graph(papers).expect("Failed to build graph");
    let build_time = build_start.elapsed();

    let total_values: usize = graph.nodes().iter().map(|n| n.values.len()).sum::<usize>()
        + graph.edges().iter().map(|e| e.values.len()).sum::<usize>();
    println!("Built graph in {:?}", build_time);
    println!(
        "  - {} nodes, {} edges, {} total values, {} distinct fields",
        graph.nodes().len(),
        graph.edges().len(),
        total_values,
        graph.features().len()
    );

    if let Err(e) = gexf::validate_graph(&graph) {
        eprintln!("Generated graph is invalid: {}", e);
        std::process::exit(1);
    }

    let options = EncodeOptions::new().last_modified("2024-01-15");

    // Benchmark encoding (uncompressed)
    let encode_start = Instant::now();
    let encoded = encode_to_vec(&graph, &options).expect("Failed to encode");
    let encode_time = encode_start.elapsed();

    println!("\nUncompressed: {} bytes in {:?}", encoded.len(), encode_time);
    println!(
        "  Throughput: {:.2} MB/s",
        (encoded.len() as f64 / 1_000_000.0) / encode_time.as_secs_f64()
    );

    // Benchmark encoding (no indentation)
    let compact_options = options.clone().indent("");
    let compact_start = Instant::now();
    let compact = encode_to_vec(&graph, &compact_options).expect("Failed to encode compact");
    let compact_time = compact_start.elapsed();

    println!("\nCompact: {} bytes in {:?}", compact.len(), compact_time);
    println!(
        "  Size vs indented: {:.1}%",
        100.0 * compact.len() as f64 / encoded.len() as f64
    );

    // Benchmark compressed encoding at a few levels
    for level in [1, 3, 9, 19] {
        let start = Instant::now();
        let mut compressed = Vec::new();
        encode_compressed(&mut compressed, &graph, level, &options).expect("Failed to compress");
        let elapsed = start.elapsed();

        println!(
            "\nzstd level {:>2}: {} bytes in {:?} ({:.1}% of uncompressed)",
            level,
            compressed.len(),
            elapsed,
            100.0 * compressed.len() as f64 / encoded.len() as f64
        );
    }
}
