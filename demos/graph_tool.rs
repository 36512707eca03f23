//! Runs one of the graph algorithms over an edge-list file (or stdin) and
//! prints the result.
//!
//! Usage:
//!   cargo run --example graph_tool -- sp --algorithm dijkstra --source 0 tests/data/tinyEWD.txt
//!   cargo run --example graph_tool -- mst --algorithm kruskal tests/data/tinyEWG.txt
//!   cargo run --example graph_tool -- uf tests/data/tinyUF.txt
//!   cat tests/data/tinyDAG.txt | cargo run --example graph_tool -- topo
//!   cargo run --example graph_tool -- -vv scc tests/data/tinyDG.txt

#[cfg(feature = "tracing")]
mod inner {
    use std::fs::File;
    use std::io::{self, Read};
    use std::process;

    use clap::{Parser, Subcommand, ValueEnum};
    use graphalgs::{
        mst::{KruskalMst, LazyPrimMst, PrimMst},
        prelude::*,
        sp::{AcyclicSp, BellmanFordSp, DijkstraSp},
        tracing_support::{dump_span_timings, reset_span_timings},
        union_find::UnionFind,
    };
    use tracing::{Level, info};

    /// Run a graph algorithm over an edge list.
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Increase log verbosity (-v for debug, -vv for trace)
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        /// Print per-span timings instead of log output
        #[arg(long, global = true)]
        timings: bool,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand, Debug)]
    enum Command {
        /// Single-source shortest paths in an edge-weighted digraph
        Sp {
            #[arg(long, value_enum, default_value_t = SpAlgorithm::Dijkstra)]
            algorithm: SpAlgorithm,

            #[arg(long, default_value_t = 0)]
            source: usize,

            /// Input file (use '-' or omit to read from stdin)
            input: Option<String>,
        },
        /// Minimum spanning forest of an edge-weighted graph
        Mst {
            #[arg(long, value_enum, default_value_t = MstAlgorithm::Prim)]
            algorithm: MstAlgorithm,

            input: Option<String>,
        },
        /// Union-find over a site count followed by pairs
        Uf { input: Option<String> },
        /// Topological order of a digraph
        Topo { input: Option<String> },
        /// Strongly connected components of a digraph
        Scc { input: Option<String> },
    }

    #[derive(ValueEnum, Clone, Copy, Debug)]
    enum SpAlgorithm {
        Dijkstra,
        BellmanFord,
        Acyclic,
        AcyclicLongest,
    }

    #[derive(ValueEnum, Clone, Copy, Debug)]
    enum MstAlgorithm {
        LazyPrim,
        Prim,
        Kruskal,
    }

    pub fn run() {
        let args = Args::parse();
        if args.timings {
            reset_span_timings();
        } else {
            let level = match args.verbose {
                0 => Level::INFO,
                1 => Level::DEBUG,
                _ => Level::TRACE,
            };
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(io::stderr)
                .init();
        }

        let result = match args.command {
            Command::Sp {
                algorithm,
                source,
                input,
            } => run_sp(algorithm, source, input.as_deref()),
            Command::Mst { algorithm, input } => run_mst(algorithm, input.as_deref()),
            Command::Uf { input } => run_uf(input.as_deref()),
            Command::Topo { input } => run_topo(input.as_deref()),
            Command::Scc { input } => run_scc(input.as_deref()),
        };
        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
        if args.timings {
            dump_span_timings();
        }
    }

    fn open(input: Option<&str>) -> Result<Box<dyn Read>, ParseError> {
        Ok(match input {
            Some("-") | None => Box::new(io::stdin()),
            Some(path) => Box::new(File::open(path)?),
        })
    }

    fn summarize<G: Adjacency>(graph: &G) {
        let kind = if graph.is_directed() { "directed" } else { "undirected" };
        info!(
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            "loaded {kind} graph"
        );
    }

    fn run_sp(algorithm: SpAlgorithm, source: usize, input: Option<&str>) -> Result<(), ParseError> {
        let graph = EdgeWeightedDigraph::from_reader(open(input)?)?;
        summarize(&graph);
        let engine: Box<dyn ShortestPaths> = match algorithm {
            SpAlgorithm::Dijkstra => Box::new(DijkstraSp::new(&graph, source)?),
            SpAlgorithm::BellmanFord => {
                let sp = BellmanFordSp::new(&graph, source)?;
                if let Some(cycle) = sp.negative_cycle() {
                    println!("negative cycle:");
                    for edge in cycle {
                        println!("  {edge}");
                    }
                    return Ok(());
                }
                Box::new(sp)
            }
            SpAlgorithm::Acyclic => Box::new(AcyclicSp::shortest(&graph, source)?),
            SpAlgorithm::AcyclicLongest => Box::new(AcyclicSp::longest(&graph, source)?),
        };
        for v in 0..graph.num_vertices() {
            match engine.path_to(v)? {
                Some(path) => println!("{source} to {v} ({:.2})  {path}", engine.dist_to(v)?),
                None => println!("{source} to {v}           no path"),
            }
        }
        Ok(())
    }

    fn run_mst(algorithm: MstAlgorithm, input: Option<&str>) -> Result<(), ParseError> {
        let graph = EdgeWeightedGraph::from_reader(open(input)?)?;
        summarize(&graph);
        let forest: Box<dyn SpanningForest> = match algorithm {
            MstAlgorithm::LazyPrim => Box::new(LazyPrimMst::new(&graph)?),
            MstAlgorithm::Prim => Box::new(PrimMst::new(&graph)?),
            MstAlgorithm::Kruskal => Box::new(KruskalMst::new(&graph)?),
        };
        for edge in forest.edges() {
            println!("{edge}");
        }
        println!("{:.5}", forest.weight());
        Ok(())
    }

    fn run_uf(input: Option<&str>) -> Result<(), ParseError> {
        let mut text = String::new();
        open(input)?.read_to_string(&mut text)?;
        let mut tokens = text.split_whitespace().map(|token| {
            token.parse::<usize>().map_err(|_| ParseError::InvalidInteger {
                token: token.to_string(),
            })
        });
        let n = tokens.next().ok_or(ParseError::MissingToken("site count"))??;
        let mut uf = UnionFind::new(n);
        while let Some(p) = tokens.next() {
            let q = tokens.next().ok_or(ParseError::MissingToken("site"))??;
            let p = p?;
            if uf.union(p, q)? {
                println!("{p} {q}");
            }
        }
        println!("{} components", uf.count());
        Ok(())
    }

    fn run_topo(input: Option<&str>) -> Result<(), ParseError> {
        let graph = Digraph::from_reader(open(input)?)?;
        summarize(&graph);
        let topological = graph.topological();
        match topological.order() {
            Some(order) => {
                for v in order {
                    println!("{v}");
                }
            }
            None => {
                let finder = graph.directed_cycle();
                if let Some(cycle) = finder.cycle() {
                    let vertices: Vec<_> = cycle.vertices().iter().map(usize::to_string).collect();
                    println!("directed cycle: {}", vertices.join(" "));
                }
            }
        }
        Ok(())
    }

    fn run_scc(input: Option<&str>) -> Result<(), ParseError> {
        let graph = Digraph::from_reader(open(input)?)?;
        summarize(&graph);
        let scc = graph.strong_components();
        println!("{} strong components", scc.count());
        let mut members = vec![Vec::new(); scc.count()];
        for v in 0..graph.num_vertices() {
            members[scc.id(v)?].push(v.to_string());
        }
        for component in members {
            println!("{}", component.join(" "));
        }
        Ok(())
    }
}

#[cfg(feature = "tracing")]
fn main() {
    inner::run();
}

#[cfg(not(feature = "tracing"))]
fn main() {
    println!("This example requires the 'tracing' feature to be enabled.");
    println!("Run with: cargo run --example graph_tool --features tracing");
}
