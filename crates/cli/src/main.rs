use std::path::Path;
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wugraph_cli::{App, Command};
use wugraph_testgen::{GraphDefinition, GraphParams};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::parse();
    match &app.command {
        Command::Generate(args) => generate(args),
        Command::Mst(args) => mst(args),
        Command::Check(args) => check(args),
    }
}

fn load(path: &Path) -> GraphDefinition {
    let file = fs::File::open(path).unwrap_or_else(|e| {
        eprintln!("Failed to open {}: {e}", path.display());
        process::exit(1);
    });
    serde_json::from_reader(file).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {e}", path.display());
        process::exit(1);
    })
}

fn generate(args: &wugraph_cli::GenerateArgs) {
    if args.min_weight > args.max_weight {
        eprintln!(
            "--min-weight ({}) must not exceed --max-weight ({})",
            args.min_weight, args.max_weight
        );
        process::exit(1);
    }

    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create output directory: {e}");
        process::exit(1);
    });

    let params = GraphParams::builder()
        .n_vertex(args.n_vertex)
        .n_extra_edge(args.n_extra_edge)
        .min_weight(args.min_weight)
        .max_weight(args.max_weight)
        .seed(args.seed)
        .build();
    let graphs = wugraph_testgen::generate_mult_graphs(args.n_graph, &params);

    for graph in &graphs {
        let path = args.output_dir.join(format!("{}.json", graph.get_id()));
        let file = fs::File::create(&path).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {e}", path.display());
            process::exit(1);
        });
        serde_json::to_writer_pretty(file, graph.get_definition()).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        });
    }

    println!(
        "Generated {} graphs to {}",
        graphs.len(),
        args.output_dir.display()
    );
}

fn mst(args: &wugraph_cli::MstArgs) {
    let graph = load(&args.input).into_graph();
    let tree = graph.minimum_spanning_tree();
    let total = wugraph_cli::checked_total_weight(&tree).unwrap_or_else(|| {
        eprintln!(
            "Total weight of the spanning tree of {} overflows i64",
            args.input.display()
        );
        process::exit(1);
    });

    if args.json {
        let summary = wugraph_cli::mst_json(&tree, total);
        println!("{summary}");
        return;
    }

    for (edge, weight) in wugraph_cli::sorted_tree_edges(&tree) {
        println!("{} - {}: {weight}", edge.first(), edge.second());
    }
    println!("total weight: {total}");
    let components = tree.spanning_component_count();
    if components > 1 {
        println!("graph is disconnected: spanning forest of {components} trees");
    }
}

fn check(args: &wugraph_cli::CheckArgs) {
    let definition = load(&args.input);
    let (graph, rejections) = definition.build_checked();

    for rejection in &rejections {
        let edge = &rejection.edge;
        println!(
            "{} - {}: {} ({})",
            edge.u,
            edge.v,
            rejection.error,
            rejection.error.kind()
        );
    }

    if rejections.is_empty() {
        println!(
            "OK: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
    } else {
        println!("{} of {} edges rejected", rejections.len(), definition.edge_count());
        process::exit(1);
    }
}
