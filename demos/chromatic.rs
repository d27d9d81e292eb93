use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::eyre;
use color_eyre::Result;

use chrompoly::coordinator::{Config, Coordinator, Status};
use chrompoly::graph::Graph;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Family {
    /// No edges
    Empty,
    /// Every pair of vertices adjacent
    Complete,
    /// Vertices 0-1-2-...-(n-1)
    Path,
    /// A path closed back to vertex 0
    Cycle,
    /// Vertex 0 adjacent to all others
    Star,
}

#[derive(Debug, Parser)]
#[command(author, version)]
#[command(about = "Chromatic polynomial of a small graph")]
struct Cli {
    /// Number of vertices.
    #[arg(value_name = "INT", default_value = "4")]
    n: usize,

    /// Graph family on `n` vertices. Ignored if `--edges` is given.
    #[arg(short, long, value_enum, default_value = "cycle")]
    family: Family,

    /// Explicit edge list, e.g. `0-1,1-2,2-0`.
    #[arg(short, long, value_name = "EDGES", value_delimiter = ',', value_parser = parse_edge)]
    edges: Vec<(usize, usize)>,

    /// Also print the number of proper colorings with this many colors.
    #[arg(long, value_name = "INT")]
    evaluate: Vec<i64>,

    /// Progress polling interval, in milliseconds.
    #[arg(long, value_name = "MS", default_value = "100")]
    interval: u64,

    /// Log level.
    #[arg(long, default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn parse_edge(s: &str) -> Result<(usize, usize), String> {
    let (a, b) = s
        .trim()
        .split_once('-')
        .ok_or_else(|| format!("expected `a-b`, got `{}`", s))?;
    let parse = |x: &str| x.trim().parse::<usize>().map_err(|e| format!("`{}`: {}", x, e));
    Ok((parse(a)?, parse(b)?))
}

fn build_graph(args: &Cli) -> Result<Graph> {
    if !args.edges.is_empty() {
        return Ok(Graph::from_edges(args.n, args.edges.iter().copied())?);
    }
    let graph = match args.family {
        Family::Empty => Graph::new(args.n),
        Family::Complete => Graph::complete(args.n),
        Family::Path => Graph::path(args.n),
        Family::Cycle => Graph::cycle(args.n),
        Family::Star => Graph::star(args.n),
    };
    Ok(graph)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let time_total = Instant::now();

    let graph = build_graph(&args)?;
    println!("graph: n = {}, {} edges", graph.order(), graph.size());
    for edge in graph.edges() {
        println!("  {}", edge);
    }

    let config = Config::new().with_idle_timeout(Duration::from_millis(args.interval));
    let coordinator = Coordinator::spawn(graph, config)?;

    let interval = Duration::from_millis(args.interval);
    let status = loop {
        if let Some(status) = coordinator.wait_until_settled(interval) {
            break status;
        }
        println!("{}", coordinator.progress());
    };

    match (status, coordinator.result()) {
        (Status::Done, Some(result)) => {
            println!("lattice: {} partitions", result.lattice().len());
            println!("matrix: {} non-zero entries", result.matrix().num_nonzero());
            println!("P(x) = {}", result.polynomial());
            println!("P(x) = {:#}", result.polynomial());
            for &k in &args.evaluate {
                println!("P({}) = {}", k, result.polynomial().evaluate(k));
            }
        }
        (Status::Idle, None) if coordinator.snapshot().order() == 0 => {
            println!("Graph has no vertices");
        }
        (status, _) => return Err(eyre!("computation ended in status {}", status)),
    }

    println!("Done in {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
